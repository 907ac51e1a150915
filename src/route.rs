use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::utils::table::render_table;

/// The only thing watchers need to know about a route: where it leads.
///
/// Routing tables plug their own route type in by implementing this trait.
pub trait Routable {
    /// Logical name the route serves, usually a service name
    fn destination(&self) -> &str;
}

/// Routing table entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Service name the route leads to
    pub destination: String,
    /// Gateway address used to reach the destination
    pub gateway: String,
    /// Router which announced the route
    pub router: String,
    /// Network the route belongs to
    pub network: String,
    /// Link used to reach the gateway
    pub link: String,
    /// Route cost; lower is preferred
    pub metric: i64,
}

impl Route {
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            ..Default::default()
        }
    }

    pub fn with_gateway(
        mut self,
        gateway: impl Into<String>,
    ) -> Self {
        self.gateway = gateway.into();
        self
    }

    pub fn with_router(
        mut self,
        router: impl Into<String>,
    ) -> Self {
        self.router = router.into();
        self
    }

    pub fn with_network(
        mut self,
        network: impl Into<String>,
    ) -> Self {
        self.network = network.into();
        self
    }

    pub fn with_link(
        mut self,
        link: impl Into<String>,
    ) -> Self {
        self.link = link.into();
        self
    }

    pub fn with_metric(
        mut self,
        metric: i64,
    ) -> Self {
        self.metric = metric;
        self
    }
}

impl Routable for Route {
    fn destination(&self) -> &str {
        &self.destination
    }
}

impl fmt::Display for Route {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let row = vec![
            self.destination.clone(),
            self.gateway.clone(),
            self.router.clone(),
            self.network.clone(),
            self.link.clone(),
            self.metric.to_string(),
        ];
        let table = render_table(
            &["Destination", "Gateway", "Router", "Network", "Link", "Metric"],
            vec![row],
        );
        f.write_str(&table)
    }
}
