use planner_api::Application;
use planner_infra::setup_context;
use planner_sdk::PlannerSDK;

// Launch the application as a background task
pub async fn spawn_app() -> PlannerSDK {
    let mut ctx = setup_context().await;
    ctx.config.port = 0; // Random port

    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}/api/v1", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    PlannerSDK::new(address)
}
