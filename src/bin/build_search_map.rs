use investor_desk::{rebuild_search_map, PortalConfig};
use log::error;

fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = PortalConfig::from_env();

    match rebuild_search_map(&config) {
        Ok(search_map) => {
            println!(
                "Wrote {} aliases to {}",
                search_map.len(),
                config.search_map_path.display()
            );
        }
        Err(e) => {
            error!(
                kind = e.kind(),
                path:% = config.companies_path.display();
                "Failed to build search map: {}",
                e
            );
            std::process::exit(1);
        }
    }
}
