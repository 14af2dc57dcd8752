use super::Client;
use crate::error::Result;
use crate::json;
use tracing::debug;

impl Client {
    /// Names of all networks in the xCAT inventory (`GET /networks?pretty=1`).
    ///
    /// # Errors
    ///
    /// Any error from [`Client::request`].
    pub fn get_networks(&self) -> Result<Vec<u8>> {
        self.request("/networks?pretty=1")
    }

    /// Full objects of every registered network.
    ///
    /// Lists the network names, then fetches them in one
    /// `GET /networks/<name1,name2,...>?pretty=1` request.
    ///
    /// # Errors
    ///
    /// Request errors from either call, or a decode error when the name list
    /// is not a JSON array of strings.
    pub fn get_network_objects(&self) -> Result<Vec<u8>> {
        let names = self.get_networks()?;
        let csv = json::network_names_csv(&names)?;
        debug!(networks = %csv, "Fetching xCAT network objects");
        self.request(&format!("/networks/{csv}?pretty=1"))
    }
}
