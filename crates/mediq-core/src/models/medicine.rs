use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::diagnosis::Medicine;

/// The diagnosis service's response to `POST /analyze_medicine`, keyed on
/// its `status` field: `"success"` carries the matched medicines, anything
/// else carries a message plus whatever text OCR managed to extract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub enum MedicineAnalysis {
    Recognized {
        medicines: Vec<Medicine>,
        extracted_text: String,
    },
    Unrecognized {
        status: String,
        message: String,
        extracted_text: String,
    },
}

/// The raw response shape. Serde's tagged enums cannot express "any other
/// tag", so decoding goes through this struct and branches on the status.
#[derive(Deserialize)]
struct WireMedicineAnalysis {
    status: String,
    #[serde(default)]
    medicines: Vec<Medicine>,
    #[serde(default)]
    message: String,
    #[serde(default)]
    extracted_text: String,
}

impl From<WireMedicineAnalysis> for MedicineAnalysis {
    fn from(wire: WireMedicineAnalysis) -> Self {
        if wire.status == "success" {
            MedicineAnalysis::Recognized {
                medicines: wire.medicines,
                extracted_text: wire.extracted_text,
            }
        } else {
            MedicineAnalysis::Unrecognized {
                status: wire.status,
                message: wire.message,
                extracted_text: wire.extracted_text,
            }
        }
    }
}

impl<'de> Deserialize<'de> for MedicineAnalysis {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        WireMedicineAnalysis::deserialize(deserializer).map(Into::into)
    }
}

/// Map a file extension to the content type the upload declares.
///
/// Returns `None` for extensions that aren't supported image formats.
pub fn image_content_type_for_extension(ext: &str) -> Option<&'static str> {
    match ext.to_lowercase().as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "bmp" => Some("image/bmp"),
        "webp" => Some("image/webp"),
        "tif" | "tiff" => Some("image/tiff"),
        _ => None,
    }
}
