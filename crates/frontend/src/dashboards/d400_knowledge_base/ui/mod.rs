mod dashboard;

pub use dashboard::KnowledgeBaseDashboard;
