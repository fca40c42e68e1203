#[tokio::main]
async fn main() {
    carta_backend::run().await;
}
