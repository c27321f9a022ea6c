use anyhow::Result;
use prscat_core::PrsCatalog;

#[derive(Debug, Clone, Copy)]
pub(super) struct WebServeOptions<'a> {
    pub(super) host: &'a str,
    pub(super) port: u16,
}

pub(super) fn serve(catalog: PrsCatalog, options: WebServeOptions<'_>) -> Result<()> {
    prscat_web::serve_web(catalog, options.host, options.port)
}
