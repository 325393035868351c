use planner_domain::{Entity, ID};
use std::sync::Mutex;

/// Useful functions for creating inmemory repositories

pub fn insert<T: Clone>(val: &T, collection: &Mutex<Vec<T>>) {
    let mut collection = collection.lock().unwrap();
    collection.push(val.clone());
}

pub fn find<T: Clone + Entity>(val_id: &ID, collection: &Mutex<Vec<T>>) -> Option<T> {
    let collection = collection.lock().unwrap();
    collection.iter().find(|item| item.id() == val_id).cloned()
}

pub fn find_by<T: Clone, F: FnMut(&T) -> bool>(collection: &Mutex<Vec<T>>, mut compare: F) -> Vec<T> {
    let collection = collection.lock().unwrap();
    let mut items = Vec::new();
    for item in collection.iter() {
        if compare(item) {
            items.push(item.clone());
        }
    }
    items
}

/// Replaces the first item matching `compare` or appends `val` if none matched
pub fn upsert_by<T: Clone, F: Fn(&T) -> bool>(val: &T, collection: &Mutex<Vec<T>>, compare: F) {
    let mut collection = collection.lock().unwrap();
    match collection.iter().position(|item| compare(item)) {
        Some(i) => collection[i] = val.clone(),
        None => collection.push(val.clone()),
    }
}
