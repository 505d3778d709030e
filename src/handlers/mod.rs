pub mod call;
pub mod feature_lookup;
pub mod feature_stream;
pub mod recommend_session;
pub mod route_recorder;
pub mod socket_actor;

pub use call::{CallHandler, Inbound, Outbound};
pub use feature_lookup::FeatureLookup;
pub use feature_stream::FeatureStream;
pub use recommend_session::RecommendSession;
pub use route_recorder::RouteRecorder;
