//! Pre-trained classifiers loaded from the artifact directory.
//!
//! Two model kinds are supported:
//! - `decision_tree`: leaf class counts give per-class probabilities.
//! - `nearest_centroid`: hard predictions only, no probability output.
//!
//! Both are fitted offline; inference here is read-only and allocation-light.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("model has no classes")]
    NoClasses,

    #[error("expected {expected} features, got {actual}")]
    FeatureCountMismatch { expected: usize, actual: usize },

    #[error("tree has no nodes")]
    EmptyTree,

    #[error("node {node} splits on feature {feature}, but the model has {n_features} features")]
    FeatureOutOfRange {
        node: usize,
        feature: usize,
        n_features: usize,
    },

    #[error("node {node} points to child {child}, which is not a later node (tree has {n_nodes})")]
    InvalidChild {
        node: usize,
        child: usize,
        n_nodes: usize,
    },

    #[error("leaf {node} has {actual} class counts, expected {expected}")]
    LeafWidthMismatch {
        node: usize,
        expected: usize,
        actual: usize,
    },

    #[error("leaf {node} holds no samples")]
    EmptyLeaf { node: usize },

    #[error("leaf {node} has invalid count {count} for class {class}")]
    InvalidCount { node: usize, class: usize, count: f64 },

    #[error("centroid {class} has {actual} dimensions, expected {expected}")]
    CentroidWidthMismatch {
        class: usize,
        expected: usize,
        actual: usize,
    },

    #[error("model does not produce probabilities")]
    ProbabilityUnsupported,

    #[error("class index {0} has no label")]
    UnknownClass(usize),
}

/// Inference interface shared by every model kind.
pub trait Classifier: Send + Sync {
    fn n_classes(&self) -> usize;

    fn n_features(&self) -> usize;

    fn supports_probability(&self) -> bool;

    /// Single best class index.
    fn predict(&self, features: &[f64]) -> Result<usize, ModelError>;

    /// One probability per class, aligned with the label encoder's classes.
    fn predict_proba(&self, features: &[f64]) -> Result<Vec<f64>, ModelError>;
}

/// Serialized classifier artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TrainedModel {
    DecisionTree(DecisionTree),
    NearestCentroid(NearestCentroid),
}

impl TrainedModel {
    pub fn kind(&self) -> &'static str {
        match self {
            TrainedModel::DecisionTree(_) => "decision_tree",
            TrainedModel::NearestCentroid(_) => "nearest_centroid",
        }
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        match self {
            TrainedModel::DecisionTree(tree) => tree.validate(),
            TrainedModel::NearestCentroid(model) => model.validate(),
        }
    }

    fn inner(&self) -> &dyn Classifier {
        match self {
            TrainedModel::DecisionTree(tree) => tree,
            TrainedModel::NearestCentroid(model) => model,
        }
    }
}

impl Classifier for TrainedModel {
    fn n_classes(&self) -> usize {
        self.inner().n_classes()
    }

    fn n_features(&self) -> usize {
        self.inner().n_features()
    }

    fn supports_probability(&self) -> bool {
        self.inner().supports_probability()
    }

    fn predict(&self, features: &[f64]) -> Result<usize, ModelError> {
        self.inner().predict(features)
    }

    fn predict_proba(&self, features: &[f64]) -> Result<Vec<f64>, ModelError> {
        self.inner().predict_proba(features)
    }
}

fn check_width(expected: usize, features: &[f64]) -> Result<(), ModelError> {
    if features.len() != expected {
        return Err(ModelError::FeatureCountMismatch {
            expected,
            actual: features.len(),
        });
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Decision tree
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TreeNode {
    /// Go left when `features[feature] <= threshold`.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    /// Training-sample counts per class that reached this leaf.
    Leaf { counts: Vec<f64> },
}

/// Flat array-of-nodes tree, root at index 0. Children always sit after their
/// parent, so traversal terminates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DecisionTree {
    pub n_features: usize,
    pub n_classes: usize,
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.n_classes == 0 {
            return Err(ModelError::NoClasses);
        }
        if self.nodes.is_empty() {
            return Err(ModelError::EmptyTree);
        }
        let n_nodes = self.nodes.len();
        for (node, entry) in self.nodes.iter().enumerate() {
            match entry {
                TreeNode::Split {
                    feature,
                    left,
                    right,
                    ..
                } => {
                    if *feature >= self.n_features {
                        return Err(ModelError::FeatureOutOfRange {
                            node,
                            feature: *feature,
                            n_features: self.n_features,
                        });
                    }
                    for child in [*left, *right] {
                        if child <= node || child >= n_nodes {
                            return Err(ModelError::InvalidChild {
                                node,
                                child,
                                n_nodes,
                            });
                        }
                    }
                }
                TreeNode::Leaf { counts } => {
                    if counts.len() != self.n_classes {
                        return Err(ModelError::LeafWidthMismatch {
                            node,
                            expected: self.n_classes,
                            actual: counts.len(),
                        });
                    }
                    if let Some((class, &count)) = counts
                        .iter()
                        .enumerate()
                        .find(|(_, c)| !c.is_finite() || **c < 0.0)
                    {
                        return Err(ModelError::InvalidCount { node, class, count });
                    }
                    if counts.iter().sum::<f64>() <= 0.0 {
                        return Err(ModelError::EmptyLeaf { node });
                    }
                }
            }
        }
        Ok(())
    }

    fn leaf_for(&self, features: &[f64]) -> Result<(usize, &[f64]), ModelError> {
        check_width(self.n_features, features)?;
        let mut node = 0;
        loop {
            match self.nodes.get(node).ok_or(ModelError::EmptyTree)? {
                TreeNode::Leaf { counts } => return Ok((node, counts.as_slice())),
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let next = if features[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                    if next <= node {
                        return Err(ModelError::InvalidChild {
                            node,
                            child: next,
                            n_nodes: self.nodes.len(),
                        });
                    }
                    node = next;
                }
            }
        }
    }
}

impl Classifier for DecisionTree {
    fn n_classes(&self) -> usize {
        self.n_classes
    }

    fn n_features(&self) -> usize {
        self.n_features
    }

    fn supports_probability(&self) -> bool {
        true
    }

    fn predict(&self, features: &[f64]) -> Result<usize, ModelError> {
        let proba = self.predict_proba(features)?;
        // First maximum wins, matching argmax semantics.
        let mut best = 0;
        for (class, p) in proba.iter().enumerate() {
            if *p > proba[best] {
                best = class;
            }
        }
        Ok(best)
    }

    fn predict_proba(&self, features: &[f64]) -> Result<Vec<f64>, ModelError> {
        let (node, counts) = self.leaf_for(features)?;
        let total: f64 = counts.iter().sum();
        if total <= 0.0 {
            return Err(ModelError::EmptyLeaf { node });
        }
        Ok(counts.iter().map(|c| c / total).collect())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Nearest centroid
// ────────────────────────────────────────────────────────────────────────────

/// One centroid per class; the closest centroid (squared Euclidean) wins.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NearestCentroid {
    pub n_features: usize,
    pub centroids: Vec<Vec<f64>>,
}

impl NearestCentroid {
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.centroids.is_empty() {
            return Err(ModelError::NoClasses);
        }
        for (class, centroid) in self.centroids.iter().enumerate() {
            if centroid.len() != self.n_features {
                return Err(ModelError::CentroidWidthMismatch {
                    class,
                    expected: self.n_features,
                    actual: centroid.len(),
                });
            }
        }
        Ok(())
    }
}

impl Classifier for NearestCentroid {
    fn n_classes(&self) -> usize {
        self.centroids.len()
    }

    fn n_features(&self) -> usize {
        self.n_features
    }

    fn supports_probability(&self) -> bool {
        false
    }

    fn predict(&self, features: &[f64]) -> Result<usize, ModelError> {
        check_width(self.n_features, features)?;
        let mut best: Option<(usize, f64)> = None;
        for (class, centroid) in self.centroids.iter().enumerate() {
            let distance: f64 = centroid
                .iter()
                .zip(features)
                .map(|(c, x)| (c - x) * (c - x))
                .sum();
            if best.map_or(true, |(_, d)| distance < d) {
                best = Some((class, distance));
            }
        }
        best.map(|(class, _)| class).ok_or(ModelError::NoClasses)
    }

    fn predict_proba(&self, _features: &[f64]) -> Result<Vec<f64>, ModelError> {
        Err(ModelError::ProbabilityUnsupported)
    }
}
