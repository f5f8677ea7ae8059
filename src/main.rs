use color_eyre::eyre::eyre;
use database::{DatabaseGenerator, DatabaseLoader};
use env_logger::Env;
use log::{error, info};
use map_core::utils::TimeEstimation;
use web::{MapAppData, MapSettings, TransferMapServer};

#[cfg(target_os = "linux")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default()
        .default_filter_or("debug")
    ).init();

    let settings = MapSettings::from_env().map_err(|e| eyre!(e))?;

    let (database, estimated) =
        TimeEstimation::estimate_async(DatabaseLoader::load(&settings.data_dir)).await;

    // without all three documents there is nothing to draw
    let database = database.map_err(|e| {
        error!("data load failed: {}", e);
        e
    })?;

    info!("database loaded: {} ms", estimated);

    let transfer_data = DatabaseGenerator::generate(&database);

    let data = MapAppData::new(transfer_data, settings)?;

    TransferMapServer::new(data).run().await?;

    Ok(())
}
