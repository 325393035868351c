mod telemetry;

use planner_api::Application;
use planner_infra::setup_context;
use telemetry::{get_subscriber, init_subscriber};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("planner".into(), "info".into());
    init_subscriber(subscriber);

    let context = setup_context().await;

    let app = Application::new(context).await?;
    app.start().await
}
