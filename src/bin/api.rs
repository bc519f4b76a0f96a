pub use bdrc_contact::api::handler;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    bdrc_contact::setup_logging();
    lambda_runtime::run(lambda_runtime::service_fn(handler)).await
}
