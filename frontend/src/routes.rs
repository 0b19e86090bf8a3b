use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::data_definitions::document_request::DocumentRequest;
use crate::data_definitions::url_param::UrlParam;
use crate::pages::home_page::HomePage;
use crate::pages::view_document_page::ViewDocumentPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/view_document/:request")]
    ViewDocumentPage { request: UrlParam<DocumentRequest> },

}

impl Route {
    pub fn view_document(file_name: String) -> Self {
        Self::ViewDocumentPage {
            request: UrlParam::from(DocumentRequest { file_name }),
        }
    }
}
