#[tokio::main]
async fn main() {
    petverse::start_server().await;
}
