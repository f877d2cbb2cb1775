//! Analysis requests

use parapet_attachment::{AttachmentMethod, DeckType, MembraneFamily, ProjectType};
use parapet_domain::{Coordinates, ExposureCategory};
use serde::{Deserialize, Serialize};

/// One analysis request
///
/// An address or a coordinate pair is required; everything else is an
/// optional override layered onto resolved data and configured
/// defaults. Caller-supplied values always win over derived ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building_height_ft: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exposure: Option<ExposureCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_type: Option<ProjectType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deck_type: Option<DeckType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub membrane_family: Option<MembraneFamily>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_method: Option<AttachmentMethod>,
}

impl AnalysisRequest {
    /// Request for a street address
    pub fn for_address(address: &str) -> Self {
        Self {
            address: Some(address.to_string()),
            ..Self::empty()
        }
    }

    /// Request for a coordinate pair
    pub fn for_coordinates(coordinates: Coordinates) -> Self {
        Self {
            coordinates: Some(coordinates),
            ..Self::empty()
        }
    }

    fn empty() -> Self {
        Self {
            address: None,
            coordinates: None,
            building_height_ft: None,
            exposure: None,
            product_type: None,
            project_type: None,
            deck_type: None,
            membrane_family: None,
            attachment_method: None,
        }
    }

    pub fn with_building_height_ft(mut self, height_ft: f64) -> Self {
        self.building_height_ft = Some(height_ft);
        self
    }

    pub fn with_exposure(mut self, exposure: ExposureCategory) -> Self {
        self.exposure = Some(exposure);
        self
    }

    pub fn with_product_type(mut self, product_type: &str) -> Self {
        self.product_type = Some(product_type.to_string());
        self
    }

    pub fn with_project_type(mut self, project_type: ProjectType) -> Self {
        self.project_type = Some(project_type);
        self
    }

    pub fn with_deck_type(mut self, deck_type: DeckType) -> Self {
        self.deck_type = Some(deck_type);
        self
    }

    pub fn with_membrane_family(mut self, membrane_family: MembraneFamily) -> Self {
        self.membrane_family = Some(membrane_family);
        self
    }

    pub fn with_attachment_method(mut self, attachment_method: AttachmentMethod) -> Self {
        self.attachment_method = Some(attachment_method);
        self
    }
}
