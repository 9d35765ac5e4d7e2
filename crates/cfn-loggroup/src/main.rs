// AWS Lambda binary entry point (custom runtime, executable named `bootstrap`)

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    cfn_loggroup::run().await
}
