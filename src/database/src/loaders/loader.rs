use crate::error::{LoadError, LoadResult};
use crate::loaders::{
    ClubEntity, ClubLoader, PlayerEntity, PlayerLoader, SeasonEntity, SeasonLoader,
    CLUBS_DOCUMENT, SEASONS_DOCUMENT, TRANSFERS_DOCUMENT,
};
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Raw documents as read from disk
pub struct DatabaseEntity {
    pub players: Vec<PlayerEntity>,
    pub clubs: Vec<ClubEntity>,
    pub seasons: Vec<SeasonEntity>,
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    /// Reads the three documents concurrently. Any failure fails the whole load.
    pub async fn load(dir: impl AsRef<Path>) -> LoadResult<DatabaseEntity> {
        let dir = dir.as_ref();

        info!("loading data from {}", dir.display());

        let (transfers, clubs, seasons) = tokio::try_join!(
            Self::read(dir.join(TRANSFERS_DOCUMENT), TRANSFERS_DOCUMENT),
            Self::read(dir.join(CLUBS_DOCUMENT), CLUBS_DOCUMENT),
            Self::read(dir.join(SEASONS_DOCUMENT), SEASONS_DOCUMENT),
        )?;

        let database = DatabaseEntity {
            players: PlayerLoader::parse(&transfers)?,
            clubs: ClubLoader::parse(&clubs)?,
            seasons: SeasonLoader::parse(&seasons)?,
        };

        debug!(
            "documents parsed: {} players, {} clubs, {} seasons",
            database.players.len(),
            database.clubs.len(),
            database.seasons.len()
        );

        Ok(database)
    }

    async fn read(path: PathBuf, document: &str) -> LoadResult<String> {
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| LoadError::Io {
                document: document.to_string(),
                source,
            })
    }
}
