use serde::{Deserialize, Serialize};
use service_core::extract::{FieldKinds, JsonKind};
use validator::Validate;

use super::{Entity, NewRecord, OpenMap};

/// Multi-step automation. Not exposed over HTTP yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Workflow {
    pub name: String,
    /// Actions with their parameters; each step is opaque.
    pub steps: Vec<OpenMap>,
    /// Gesture name or voice phrase that starts the workflow.
    pub trigger: Option<String>,
}

impl Entity for Workflow {
    const COLLECTION: &'static str = "workflow";
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateWorkflowRequest {
    #[validate(
        required(message = "name is required"),
        length(min = 1, message = "name cannot be empty")
    )]
    pub name: Option<String>,
    #[validate(required(message = "steps is required"))]
    pub steps: Option<Vec<OpenMap>>,
    pub trigger: Option<String>,
}

impl FieldKinds for CreateWorkflowRequest {
    const FIELDS: &'static [(&'static str, JsonKind)] = &[
        ("name", JsonKind::String),
        ("steps", JsonKind::Array),
        ("trigger", JsonKind::String),
    ];
}

impl NewRecord for CreateWorkflowRequest {
    type Record = Workflow;

    fn into_record(self) -> Workflow {
        Workflow {
            name: self.name.unwrap_or_default(),
            steps: self.steps.unwrap_or_default(),
            trigger: self.trigger,
        }
    }
}
