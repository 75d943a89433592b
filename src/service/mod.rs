/// Generated service descriptors and the handlers attached to them

mod descriptor;
mod handler;

pub use descriptor::{ActionDescriptor, ActionName, GraphqlSignature, ServiceDescriptor};
pub use handler::{ActionHandler, CrudContext, InsertRequest};
