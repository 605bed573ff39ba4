// Collaborator services
// Services consume the mediator's operations: the capture flow writes
// through it, the clip view renders a transient copy of its data.

pub mod capture_flow;
pub mod clip_view;
