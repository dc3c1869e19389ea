use crate::core::formats::{CsvFormat, DataFormat, DataFormatKind, JsonFormat};
use crate::domain::model::ProcessingStatus;
use crate::domain::ports::DataStorage;

/// Validate, transform and store a payload, one call at a time.
///
/// The skeleton lives in [`DataProcessor::process`]; the transform step is
/// supplied by a [`DataFormat`].
pub struct DataProcessor<S: DataStorage> {
    data_storage: S,
}

impl<S: DataStorage> DataProcessor<S> {
    pub fn new(data_storage: S) -> Self {
        Self { data_storage }
    }

    pub fn storage(&self) -> &S {
        &self.data_storage
    }

    pub fn into_storage(self) -> S {
        self.data_storage
    }

    pub fn process_csv_data(&self, data: Option<&str>) -> ProcessingStatus {
        self.process(&CsvFormat, data)
    }

    pub fn process_json_data(&self, data: Option<&str>) -> ProcessingStatus {
        self.process(&JsonFormat, data)
    }

    pub fn process_with_format(&self, kind: DataFormatKind, data: Option<&str>) -> ProcessingStatus {
        match kind {
            DataFormatKind::Csv => self.process_csv_data(data),
            DataFormatKind::Json => self.process_json_data(data),
        }
    }

    /// Storage is invoked at most once, and only with the transformed payload.
    pub fn process<F: DataFormat + ?Sized>(&self, format: &F, data: Option<&str>) -> ProcessingStatus {
        // Step 1: validation
        let data = match data {
            Some(data) if !data.is_empty() => data,
            _ => {
                tracing::debug!("Rejecting empty {} payload", format.name());
                return ProcessingStatus::ValidationFailed;
            }
        };

        // Step 2: transformation
        let transformed = match format.transform(data) {
            Ok(transformed) => transformed,
            Err(e) => {
                tracing::warn!("{}", e);
                return ProcessingStatus::TransformationFailed;
            }
        };

        // Step 3: storage
        let result = self.data_storage.store_data(&transformed);
        tracing::debug!(
            "Stored {} payload ({} bytes): {:?}",
            format.name(),
            transformed.len(),
            result
        );

        ProcessingStatus::from(result)
    }
}
