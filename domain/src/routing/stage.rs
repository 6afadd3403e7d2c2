//! Chain stages

use serde::{Deserialize, Serialize};

/// Where a query currently is in the fallback chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteStage {
    TryingCatalog,
    TryingAcademic,
    TryingSite,
    FallingBack,
    Done,
}

impl RouteStage {
    /// First stage of every query
    pub fn start() -> Self {
        RouteStage::TryingCatalog
    }

    /// Stage to move to when this one produced no records
    pub fn on_empty(self) -> Self {
        match self {
            RouteStage::TryingCatalog => RouteStage::TryingAcademic,
            RouteStage::TryingAcademic => RouteStage::TryingSite,
            RouteStage::TryingSite => RouteStage::FallingBack,
            RouteStage::FallingBack | RouteStage::Done => RouteStage::Done,
        }
    }

    /// True for the stages backed by a structured source
    pub fn is_structured(&self) -> bool {
        matches!(
            self,
            RouteStage::TryingCatalog | RouteStage::TryingAcademic | RouteStage::TryingSite
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RouteStage::TryingCatalog => "catalog",
            RouteStage::TryingAcademic => "academic",
            RouteStage::TryingSite => "site_info",
            RouteStage::FallingBack => "generative",
            RouteStage::Done => "done",
        }
    }
}

impl std::fmt::Display for RouteStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_results_walk_the_chain_in_order() {
        let mut stage = RouteStage::start();
        let mut visited = vec![stage];
        while stage != RouteStage::Done {
            stage = stage.on_empty();
            visited.push(stage);
        }
        assert_eq!(
            visited,
            vec![
                RouteStage::TryingCatalog,
                RouteStage::TryingAcademic,
                RouteStage::TryingSite,
                RouteStage::FallingBack,
                RouteStage::Done,
            ]
        );
    }

    #[test]
    fn test_structured_stages() {
        assert!(RouteStage::TryingSite.is_structured());
        assert!(!RouteStage::FallingBack.is_structured());
        assert!(!RouteStage::Done.is_structured());
    }
}
