use fetcher::{
    get_config_info, process_data, setup_logger, ArchiveClient, CAPITALS, DEFAULT_BASE_URL,
};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let cli = get_config_info();
    let logger = setup_logger(&cli);

    let base_url = cli
        .base_url
        .clone()
        .unwrap_or(String::from(DEFAULT_BASE_URL));
    let data_dir = cli.data_dir.clone().unwrap_or(String::from("./data"));

    let client = ArchiveClient::new(logger.clone(), base_url);
    process_data(&logger, &client, &CAPITALS, &data_dir).await?;
    Ok(())
}
