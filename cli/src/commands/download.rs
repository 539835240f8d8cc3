//! Overpass download flow: fetch, assemble geometry, write GeoJSON.

use std::path::Path;

use crate::commands::cli::{DownloadArgs, GeometryArg};
use geest_core::api as core_api;

pub async fn handle_download(
    args: DownloadArgs,
    cfg: &core_api::AppConfig,
) -> Result<(), core_api::CliError> {
    let query = resolve_query(&args.query, &args.query_file)?;
    if !query.contains("[out:json]") {
        return Err(core_api::CliError::Command(
            "overpass query must request JSON output with [out:json]".to_string(),
        ));
    }

    let kind = match args.kind {
        GeometryArg::Points => core_api::GeometryKind::Points,
        GeometryArg::Lines => core_api::GeometryKind::Lines,
        GeometryArg::Polygons => core_api::GeometryKind::Polygons,
    };

    let client =
        core_api::OverpassClient::new(cfg.overpass.base_url.clone(), cfg.overpass.timeout_ms)?;
    let resp = client.fetch(&query).await?;

    let features = core_api::assemble(kind, &resp);
    if features.is_empty() {
        tracing::warn!(
            "no {} assembled from {} elements",
            kind.as_str(),
            resp.elements.len()
        );
    } else {
        tracing::info!(
            "assembled {} {} from {} elements",
            features.len(),
            kind.as_str(),
            resp.elements.len()
        );
    }

    let collection = core_api::FeatureCollection::new(features);
    core_api::write_geojson(&collection, Path::new(&args.out))?;
    println!("GeoJSON saved to {}", args.out);
    Ok(())
}

fn resolve_query(
    query: &Option<String>,
    query_file: &Option<String>,
) -> Result<String, core_api::CliError> {
    match (query, query_file) {
        (Some(q), _) => Ok(q.clone()),
        (None, Some(path)) => Ok(std::fs::read_to_string(path)?),
        (None, None) => Err(core_api::CliError::Command(
            "either --query or --query-file is required".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_query_wins() {
        let q = resolve_query(&Some("[out:json];out;".to_string()), &None).unwrap();
        assert_eq!(q, "[out:json];out;");
    }

    #[test]
    fn query_file_is_read_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("query.overpassql");
        std::fs::write(&path, "[out:json];node(1);out;").unwrap();

        let q = resolve_query(&None, &Some(path.to_string_lossy().to_string())).unwrap();
        assert_eq!(q, "[out:json];node(1);out;");
    }

    #[test]
    fn missing_query_is_a_command_error() {
        let err = resolve_query(&None, &None).unwrap_err();
        assert!(matches!(err, core_api::CliError::Command(_)));
    }
}
