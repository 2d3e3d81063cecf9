//! Pre-trained price model.
//!
//! The artifact is a JSON document holding the standardization parameters and
//! the boosted trees in XGBoost's JSON dump format:
//!
//! ```json
//! {
//!   "feature_names": ["Latitude", "Longitude", "TotalArea", "GarageCars", "Bedrooms", "HouseAge"],
//!   "scaler": { "mean": [..6 values..], "scale": [..6 values..] },
//!   "base_score": 0.5,
//!   "trees": [
//!     { "nodeid": 0, "split": "Latitude", "split_condition": 0.25,
//!       "yes": 1, "no": 2, "missing": 1,
//!       "children": [ { "nodeid": 1, "leaf": 0.12 }, { "nodeid": 2, "leaf": -0.08 } ] }
//!   ]
//! }
//! ```
//!
//! The model predicts price in units of USD 100,000.

use crate::features::{FeatureVector, FEATURE_COUNT};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Failed to read model artifact {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Feature schema mismatch: model expects {expected:?}, adapter produces {found:?}")]
    SchemaMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("Invalid scaler: {0}")]
    InvalidScaler(String),

    #[error("Invalid tree {tree}: {reason}")]
    InvalidTree { tree: usize, reason: String },

    #[error("Model produced a non-finite prediction: {0}")]
    NonFinite(f64),
}

/// Inference seam: anything that maps a feature vector to a scalar price.
pub trait Regressor: Send + Sync {
    /// Column names the model was trained on, in order.
    fn feature_names(&self) -> &[String];

    /// Predicted price in model units (USD 100,000).
    fn predict(&self, features: &FeatureVector) -> Result<f64, ModelError>;
}

// ==================== Artifact Format ====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub feature_names: Vec<String>,
    pub scaler: Scaler,
    #[serde(default)]
    pub base_score: f64,
    pub trees: Vec<DumpNode>,
}

/// Standardization applied before the trees: `(x - mean) / scale`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

/// One node of an XGBoost JSON tree dump.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DumpNode {
    pub nodeid: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split_condition: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leaf: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DumpNode>,
}

impl DumpNode {
    pub fn leaf(nodeid: u32, value: f64) -> Self {
        Self {
            nodeid,
            split: None,
            split_condition: None,
            yes: None,
            no: None,
            missing: None,
            leaf: Some(value),
            children: Vec::new(),
        }
    }

    /// Split node whose first child is taken when `feature < threshold` (and
    /// for missing values), the second otherwise.
    pub fn split(nodeid: u32, feature: &str, threshold: f64, yes: DumpNode, no: DumpNode) -> Self {
        Self {
            nodeid,
            split: Some(feature.to_string()),
            split_condition: Some(threshold),
            yes: Some(yes.nodeid),
            no: Some(no.nodeid),
            missing: Some(yes.nodeid),
            leaf: None,
            children: vec![yes, no],
        }
    }
}

// ==================== Compiled Model ====================

#[derive(Debug, Clone, Copy)]
enum Node {
    Split {
        feature: usize,
        threshold: f32,
        yes: usize,
        no: usize,
        missing: usize,
    },
    Leaf(f64),
}

#[derive(Debug, Clone)]
struct Tree {
    /// Indexed by node id; root is 0
    nodes: Vec<Node>,
}

impl Tree {
    fn compile(
        index: usize,
        root: &DumpNode,
        feature_names: &[String],
    ) -> Result<Self, ModelError> {
        let invalid = |reason: String| ModelError::InvalidTree {
            tree: index,
            reason,
        };

        if root.nodeid != 0 {
            return Err(invalid(format!("root has node id {}", root.nodeid)));
        }

        let mut by_id: HashMap<u32, &DumpNode> = HashMap::new();
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            if by_id.insert(node.nodeid, node).is_some() {
                return Err(invalid(format!("duplicate node id {}", node.nodeid)));
            }
            stack.extend(node.children.iter());
        }

        let size = by_id.len();
        let mut nodes = Vec::with_capacity(size);
        for id in 0..size as u32 {
            let node = by_id
                .get(&id)
                .ok_or_else(|| invalid(format!("node ids are not contiguous, {} missing", id)))?;
            nodes.push(Self::compile_node(node, feature_names).map_err(invalid)?);
        }

        Ok(Self { nodes })
    }

    fn compile_node(node: &DumpNode, feature_names: &[String]) -> Result<Node, String> {
        if let Some(value) = node.leaf {
            if !node.children.is_empty() {
                return Err(format!("leaf {} has children", node.nodeid));
            }
            return Ok(Node::Leaf(value));
        }

        let split = node
            .split
            .as_deref()
            .ok_or_else(|| format!("node {} is neither leaf nor split", node.nodeid))?;
        let feature = resolve_feature(split, feature_names)
            .ok_or_else(|| format!("node {} splits on unknown feature '{}'", node.nodeid, split))?;
        let threshold = node
            .split_condition
            .ok_or_else(|| format!("node {} has no split_condition", node.nodeid))?;

        // Branch targets must be direct children, which keeps the walk acyclic.
        let child = |target: Option<u32>, label: &str| -> Result<usize, String> {
            let id = target
                .ok_or_else(|| format!("node {} has no '{}' branch", node.nodeid, label))?;
            if node.children.iter().any(|c| c.nodeid == id) {
                Ok(id as usize)
            } else {
                Err(format!("node {} '{}' branch {} is not a child", node.nodeid, label, id))
            }
        };

        let yes = child(node.yes, "yes")?;
        let no = child(node.no, "no")?;
        let missing = child(node.missing.or(node.yes), "missing")?;

        Ok(Node::Split {
            feature,
            threshold: threshold as f32,
            yes,
            no,
            missing,
        })
    }

    fn evaluate(&self, row: &[f64; FEATURE_COUNT]) -> f64 {
        let mut index = 0;
        loop {
            match self.nodes[index] {
                Node::Leaf(value) => return value,
                Node::Split {
                    feature,
                    threshold,
                    yes,
                    no,
                    missing,
                } => {
                    let x = row[feature];
                    index = if x.is_nan() {
                        missing
                    } else if (x as f32) < threshold {
                        yes
                    } else {
                        no
                    };
                }
            }
        }
    }
}

/// Accepts either a column name ("TotalArea") or XGBoost's positional "f2".
fn resolve_feature(split: &str, feature_names: &[String]) -> Option<usize> {
    if let Some(index) = feature_names.iter().position(|name| name == split) {
        return Some(index);
    }
    split
        .strip_prefix('f')
        .and_then(|n| n.parse::<usize>().ok())
        .filter(|&index| index < feature_names.len())
}

/// Standardizer followed by a boosted tree ensemble.
#[derive(Debug, Clone)]
pub struct GradientBoostedModel {
    feature_names: Vec<String>,
    mean: [f64; FEATURE_COUNT],
    scale: [f64; FEATURE_COUNT],
    base_score: f64,
    trees: Vec<Tree>,
}

impl GradientBoostedModel {
    /// Load and validate an artifact from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let model = Self::from_json(&contents)?;
        info!(
            "Loaded model from {} ({} trees, features: {:?})",
            path.display(),
            model.trees.len(),
            model.feature_names
        );
        Ok(model)
    }

    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let artifact: ModelArtifact = serde_json::from_str(json)?;
        Self::from_artifact(artifact)
    }

    /// Validate an artifact against the adapter's schema and compile its trees.
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self, ModelError> {
        let expected: Vec<String> = FeatureVector::column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        if artifact.feature_names != expected {
            return Err(ModelError::SchemaMismatch {
                expected: artifact.feature_names,
                found: expected,
            });
        }

        let mean = to_row(&artifact.scaler.mean, "mean")?;
        let scale = to_row(&artifact.scaler.scale, "scale")?;
        if let Some(index) = scale.iter().position(|s| *s == 0.0 || !s.is_finite()) {
            return Err(ModelError::InvalidScaler(format!(
                "scale for {} must be finite and non-zero",
                artifact.feature_names[index]
            )));
        }
        if mean.iter().any(|m| !m.is_finite()) {
            return Err(ModelError::InvalidScaler("mean must be finite".to_string()));
        }

        let trees = artifact
            .trees
            .iter()
            .enumerate()
            .map(|(index, root)| Tree::compile(index, root, &artifact.feature_names))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            feature_names: artifact.feature_names,
            mean,
            scale,
            base_score: artifact.base_score,
            trees,
        })
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    fn standardize(&self, features: &FeatureVector) -> [f64; FEATURE_COUNT] {
        let mut row = [0.0; FEATURE_COUNT];
        for (i, (x, slot)) in features.as_slice().iter().zip(row.iter_mut()).enumerate() {
            *slot = (x - self.mean[i]) / self.scale[i];
        }
        row
    }
}

fn to_row(values: &[f64], name: &str) -> Result<[f64; FEATURE_COUNT], ModelError> {
    values.try_into().map_err(|_| {
        ModelError::InvalidScaler(format!(
            "{} has {} values, expected {}",
            name,
            values.len(),
            FEATURE_COUNT
        ))
    })
}

impl Regressor for GradientBoostedModel {
    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    fn predict(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        let row = self.standardize(features);
        let prediction = self
            .trees
            .iter()
            .fold(self.base_score, |acc, tree| acc + tree.evaluate(&row));

        if prediction.is_finite() {
            Ok(prediction)
        } else {
            Err(ModelError::NonFinite(prediction))
        }
    }
}
