//! The analysis panel and the coordinator that feeds it.

mod coordinator;
pub use coordinator::{use_panel_coordinator, PanelEvent};

mod panel;
pub use panel::AnalysisPanel;

mod scores;
pub use scores::{ScoreBar, ScoreRing, ScoreSummary};

mod items;
pub use items::ItemList;
