fn main() -> Result<(), Box<dyn std::error::Error>> {
    storedesk_cli::run()
}
