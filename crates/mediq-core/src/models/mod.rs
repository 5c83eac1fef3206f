pub mod diagnosis;
pub mod medicine;

pub use diagnosis::{DiagnosisResult, DiseaseInfo, Medicine, RankedDiagnosis};
pub use medicine::{image_content_type_for_extension, MedicineAnalysis};
