use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use thiserror::Error;

// ColorBrewer sequential palettes, 9-class hex stops from light to dark.
// The historical call sites used YlOrBr and YlGn.
static PALETTES: Lazy<BTreeMap<&'static str, [&'static str; 9]>> = Lazy::new(|| {
    BTreeMap::from([
        (
            "BuGn",
            [
                "#f7fcfd", "#e5f5f9", "#ccece6", "#99d8c9", "#66c2a4", "#41ae76", "#238b45",
                "#006d2c", "#00441b",
            ],
        ),
        (
            "OrRd",
            [
                "#fff7ec", "#fee8c8", "#fdd49e", "#fdbb84", "#fc8d59", "#ef6548", "#d7301f",
                "#b30000", "#7f0000",
            ],
        ),
        (
            "YlGn",
            [
                "#ffffe5", "#f7fcb9", "#d9f0a3", "#addd8e", "#78c679", "#41ab5d", "#238443",
                "#006837", "#004529",
            ],
        ),
        (
            "YlOrBr",
            [
                "#ffffe5", "#fff7bc", "#fee391", "#fec44f", "#fe9929", "#ec7014", "#cc4c02",
                "#993404", "#662506",
            ],
        ),
    ])
});

#[derive(Error, Debug, PartialEq)]
pub enum PaletteError {
    #[error("unknown palette '{name}' (available: {available})")]
    Unknown { name: String, available: String },

    #[error("palette '{name}' supports at most {max} bands, got {requested}")]
    TooManyBands {
        name: String,
        max: usize,
        requested: usize,
    },
}

pub fn available() -> Vec<&'static str> {
    PALETTES.keys().copied().collect()
}

/// Pick `bands` colors from a named palette, spaced evenly across its
/// stops so few bands still span light to dark.
pub fn colors(name: &str, bands: usize) -> Result<Vec<&'static str>, PaletteError> {
    let stops = PALETTES.get(name).ok_or_else(|| PaletteError::Unknown {
        name: name.to_string(),
        available: available().join(", "),
    })?;

    if bands > stops.len() {
        return Err(PaletteError::TooManyBands {
            name: name.to_string(),
            max: stops.len(),
            requested: bands,
        });
    }

    if bands == 1 {
        return Ok(vec![stops[stops.len() / 2]]);
    }

    let last = (stops.len() - 1) as f64;
    Ok((0..bands)
        .map(|i| {
            let idx = (i as f64 * last / (bands - 1) as f64).round() as usize;
            stops[idx]
        })
        .collect())
}
