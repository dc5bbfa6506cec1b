use std::sync::Arc;

use spotify_web::{
    Res,
    config::Config,
    model::{Artist, TimeRange, Track},
    personalization::PersonalizationApi,
};
use tabled::{Table, Tabled};

use super::{exchange::code_flow, http_client, spinner};

#[derive(Tabled)]
struct ArtistTableRow {
    name: String,
    genres: String,
    popularity: u32,
}

#[derive(Tabled)]
struct TrackTableRow {
    name: String,
    artists: String,
    album: String,
    duration: String,
}

impl From<Artist> for ArtistTableRow {
    fn from(artist: Artist) -> Self {
        Self {
            name: artist.simplified.name,
            genres: artist
                .genres
                .iter()
                .take(3)
                .cloned()
                .collect::<Vec<_>>()
                .join(","),
            popularity: artist.popularity,
        }
    }
}

impl From<Track> for TrackTableRow {
    fn from(track: Track) -> Self {
        let seconds = track.simplified.duration_ms / 1000;
        Self {
            artists: track
                .simplified
                .artists
                .iter()
                .map(|a| a.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            name: track.simplified.name,
            album: track.album.name,
            duration: format!("{}:{:02}", seconds / 60, seconds % 60),
        }
    }
}

fn api(config: &Config, code: &str) -> Res<PersonalizationApi> {
    let flow = code_flow(config, code)?;
    Ok(PersonalizationApi::new(http_client(), Arc::new(flow)).with_base_url(&config.api_url))
}

pub async fn top_artists(
    code: &str,
    limit: Option<u32>,
    offset: Option<u32>,
    time_range: Option<TimeRange>,
) -> Res<()> {
    let config = Config::from_env()?;
    let api = api(&config, code)?;

    let pb = spinner("Fetching top artists...");
    let page = api.top_artists(limit, offset, time_range).await;
    pb.finish_and_clear();
    let page = page?;

    if page.is_empty() {
        warning!("No top artists found");
        return Ok(());
    }

    let (shown, total) = (page.offset as usize + page.items.len(), page.total);
    let rows: Vec<ArtistTableRow> = page.items.into_iter().map(Into::into).collect();
    println!("{}", Table::new(rows));
    info!("Showing {} of {} artists", shown, total);
    Ok(())
}

pub async fn top_tracks(
    code: &str,
    limit: Option<u32>,
    offset: Option<u32>,
    time_range: Option<TimeRange>,
) -> Res<()> {
    let config = Config::from_env()?;
    let api = api(&config, code)?;

    let pb = spinner("Fetching top tracks...");
    let page = api.top_tracks(limit, offset, time_range).await;
    pb.finish_and_clear();
    let page = page?;

    if page.is_empty() {
        warning!("No top tracks found");
        return Ok(());
    }

    let (shown, total) = (page.offset as usize + page.items.len(), page.total);
    let rows: Vec<TrackTableRow> = page.items.into_iter().map(Into::into).collect();
    println!("{}", Table::new(rows));
    info!("Showing {} of {} tracks", shown, total);
    Ok(())
}
