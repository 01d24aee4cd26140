/// Upstream response normalization
///
/// Upstream bodies are treated as untrusted and partially-shaped: every
/// field is pulled through a maybe-present accessor and defaulted, so the
/// client contract never carries a null or missing field.
use crate::domain::{CameraRef, Photo, RoverRef, SolWeather, WindSample};
use crate::utils::{s_at, s_at_or, v_at};
use serde_json::{json, Map, Value};

/// Page size the photo archive paginates with; total_pages derived from it
/// is informational only.
pub const PAGE_SIZE: u64 = 25;

/// Rover camera codes and their full names, used when the archive omits
/// `camera.full_name`.
const CAMERA_FULL_NAMES: &[(&str, &str)] = &[
    ("FHAZ", "Front Hazard Avoidance Camera"),
    ("RHAZ", "Rear Hazard Avoidance Camera"),
    ("MAST", "Mast Camera"),
    ("CHEMCAM", "Chemistry and Camera Complex"),
    ("MAHLI", "Mars Hand Lens Imager"),
    ("MARDI", "Mars Descent Imager"),
    ("NAVCAM", "Navigation Camera"),
    ("PANCAM", "Panoramic Camera"),
    ("MINITES", "Miniature Thermal Emission Spectrometer (Mini-TES)"),
];

pub fn camera_full_name(code: &str) -> Option<&'static str> {
    let code = code.to_ascii_uppercase();
    CAMERA_FULL_NAMES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, full)| *full)
}

/// Build a stable Photo from one raw archive record.
pub fn normalize_photo(raw: &Value) -> Photo {
    let camera_name = s_at_or(raw, &["camera", "name"], "Unknown");
    let camera_full = s_at(raw, &["camera", "full_name"])
        .or_else(|| camera_full_name(&camera_name).map(str::to_string))
        .unwrap_or_else(|| "Unknown".to_string());

    Photo {
        id: present_or_unknown(raw.get("id")),
        sol: present_or_unknown(raw.get("sol")),
        img_src: s_at_or(raw, &["img_src"], "Unknown"),
        earth_date: s_at_or(raw, &["earth_date"], "Unknown"),
        rover: RoverRef {
            name: s_at_or(raw, &["rover", "name"], "Unknown"),
        },
        camera: CameraRef {
            name: camera_name,
            full_name: camera_full,
        },
    }
}

fn present_or_unknown(v: Option<&Value>) -> Value {
    match v {
        Some(x) if !x.is_null() => x.clone(),
        _ => json!("Unknown"),
    }
}

/// Normalize a photo-archive page: the `photos` array is rebuilt in the
/// stable shape, any other provider fields pass through untouched.
pub fn photos_response(raw: &Value) -> Value {
    let photos: Vec<Photo> = raw
        .get("photos")
        .and_then(|p| p.as_array())
        .map(|arr| arr.iter().map(normalize_photo).collect())
        .unwrap_or_default();

    let mut out = match raw.as_object() {
        Some(obj) => obj.clone(),
        None => Map::new(),
    };
    out.insert("photos".to_string(), json!(photos));
    Value::Object(out)
}

/// Informational page count for a manifest's photo total.
pub fn total_pages(total_photos: u64) -> u64 {
    total_photos.div_ceil(PAGE_SIZE)
}

/// Wrap the manifest payload, injecting `total_pages`. The provider already
/// paginates photo listings; the count only tells clients how far they can
/// page.
pub fn manifest_response(raw: &Value) -> Value {
    let mut manifest = match v_at(raw, &["photo_manifest"]).and_then(|m| m.as_object()) {
        Some(obj) => obj.clone(),
        None => Map::new(),
    };

    let total_photos = manifest
        .get("total_photos")
        .and_then(|t| t.as_u64())
        .unwrap_or(0);
    manifest.insert("total_pages".to_string(), json!(total_pages(total_photos)));

    json!({ "photo_manifest": manifest })
}

/// Extract one sol from the full weather dataset. Returns None when the sol
/// key is absent, which the handler reports as 404 rather than an upstream
/// failure.
pub fn sol_weather(dataset: &Value, sol: &str) -> Option<SolWeather> {
    let record = dataset.get(sol)?;

    Some(SolWeather {
        temperature: v_at(record, &["AT", "av"]).cloned().unwrap_or(Value::Null),
        pressure: v_at(record, &["PRE", "av"]).cloned().unwrap_or(Value::Null),
        wind_data: wind_samples(record.get("WD")),
        sol: sol.to_string(),
    })
}

/// Build the wind-rose sample list from a sol's `WD` map. The reserved
/// `most_common` key is metadata, not a direction bucket, and entries
/// without a `ct` count are not samples; both are skipped. Map iteration
/// order is deterministic for a given input.
fn wind_samples(wd: Option<&Value>) -> Vec<WindSample> {
    let Some(entries) = wd.and_then(|w| w.as_object()) else {
        return Vec::new();
    };

    entries
        .iter()
        .filter(|(key, entry)| *key != "most_common" && entry.is_object())
        .filter(|(_, entry)| entry.get("ct").is_some())
        .map(|(_, entry)| WindSample {
            direction: entry.get("compass_point").cloned().unwrap_or(Value::Null),
            degrees: entry.get("compass_degrees").cloned().unwrap_or(Value::Null),
            count: entry.get("ct").cloned().unwrap_or(Value::Null),
        })
        .collect()
}
