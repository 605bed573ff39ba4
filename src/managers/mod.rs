// State managers
// The clip manager is the mediator: the only component allowed to read and
// write the persisted collections.

pub mod clip_manager;
