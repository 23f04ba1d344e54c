/// Events raised by components and consumed by the event loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardEvent {
    /// A table row was activated
    OpenSession(String),
}
