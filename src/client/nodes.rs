use super::Client;
use crate::error::Result;
use crate::json;
use tracing::error;

impl Client {
    /// All nodes registered in the xCAT inventory (`GET /nodes`).
    ///
    /// A failed request is logged at `error` level and returned.
    ///
    /// # Errors
    ///
    /// Any error from [`Client::request`].
    pub fn get_all_nodes(&self) -> Result<Vec<u8>> {
        self.request("/nodes").inspect_err(|e| {
            error!(error = %e, "Failed to list xCAT nodes");
        })
    }

    /// Query a node range.
    ///
    /// With no `segments`, `GET /nodes/<range>` is issued and must answer with
    /// a JSON object; its content is discarded and an empty list (`[]`) is
    /// returned. Use [`Client::node_names`] to get the nodes themselves.
    ///
    /// With segments, they are joined with `/` and
    /// `GET /nodes/<range>/<segments>?pretty=1` is returned as-is, e.g.
    /// `node_range("n1-n10", &["power", "state"])`.
    ///
    /// # Errors
    ///
    /// Request errors, or a decode error when the segment-less lookup does not
    /// return a JSON object.
    pub fn node_range(&self, range: &str, segments: &[&str]) -> Result<Vec<u8>> {
        if segments.is_empty() {
            let body = self.request(&format!("/nodes/{range}"))?;
            let _nodes = json::decode_object(&body)?;
            let empty: [&str; 0] = [];
            return json::to_pretty_vec(&empty);
        }

        let path = segments.join("/");
        self.request(&format!("/nodes/{range}/{path}?pretty=1"))
    }

    /// Names of the nodes in `range` (`GET /nodes/<range>`), sorted.
    ///
    /// # Errors
    ///
    /// Request errors, or a decode error when the response is not a JSON
    /// object.
    pub fn node_names(&self, range: &str) -> Result<Vec<String>> {
        let body = self.request(&format!("/nodes/{range}"))?;
        json::node_names(&body)
    }
}
