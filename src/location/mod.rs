mod route_source;

pub use route_source::RouteLocationSource;
