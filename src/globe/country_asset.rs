use bevy::asset::io::Reader;
use bevy::asset::{AssetLoader, LoadContext};
use bevy::prelude::*;
use geoglobe::error::DatasetError;
use geoglobe::records::{GeoRecord, parse_dataset};
use std::fmt;

/// Parsed country list. Entries that failed validation were logged while
/// loading and only their count is kept.
#[derive(Asset, TypePath, Debug, Clone, Default)]
pub struct CountryList {
    pub records: Vec<GeoRecord>,
    pub rejected: usize,
}

#[derive(Default)]
pub struct CountryListLoader;

#[derive(Debug)]
pub enum CountryListError {
    Io(std::io::Error),
    Utf8(std::string::FromUtf8Error),
    Dataset(DatasetError),
}

impl fmt::Display for CountryListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountryListError::Io(err) => write!(f, "could not read country list: {err}"),
            CountryListError::Utf8(err) => write!(f, "country list is not UTF-8: {err}"),
            CountryListError::Dataset(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for CountryListError {}

impl AssetLoader for CountryListLoader {
    type Asset = CountryList;
    type Settings = ();
    type Error = CountryListError;

    async fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &(),
        _load_context: &mut LoadContext<'_>,
    ) -> Result<Self::Asset, Self::Error> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .await
            .map_err(CountryListError::Io)?;
        let text = String::from_utf8(bytes).map_err(CountryListError::Utf8)?;
        parse_country_list(&text)
    }

    fn extensions(&self) -> &[&str] {
        &["json"]
    }
}

fn parse_country_list(text: &str) -> Result<CountryList, CountryListError> {
    let dataset = parse_dataset(text).map_err(CountryListError::Dataset)?;
    Ok(CountryList {
        records: dataset.records,
        rejected: dataset.rejected.len(),
    })
}
