use handlebars::Handlebars;
use serde::Serialize;

use crate::Error;

/// Server-rendered pages. Templates are compiled into the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    InvestorDesk,
    Company,
    RequestForm,
    RequestSubmitted,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::InvestorDesk,
        Page::Company,
        Page::RequestForm,
        Page::RequestSubmitted,
    ];

    pub fn template_name(self) -> &'static str {
        match self {
            Page::Home => "index",
            Page::InvestorDesk => "investor_desk",
            Page::Company => "company",
            Page::RequestForm => "request",
            Page::RequestSubmitted => "request_submitted",
        }
    }

    fn template_source(self) -> &'static str {
        match self {
            Page::Home => include_str!("../../templates/index.hbs"),
            Page::InvestorDesk => include_str!("../../templates/investor_desk.hbs"),
            Page::Company => include_str!("../../templates/company.hbs"),
            Page::RequestForm => include_str!("../../templates/request.hbs"),
            Page::RequestSubmitted => include_str!("../../templates/request_submitted.hbs"),
        }
    }
}

pub struct PageRenderer {
    handlebars: Handlebars<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, Error> {
        let mut handlebars = Handlebars::new();

        handlebars.register_partial("header", include_str!("../../templates/partials/header.hbs"))?;
        handlebars.register_partial("footer", include_str!("../../templates/partials/footer.hbs"))?;

        for page in Page::ALL {
            handlebars.register_template_string(page.template_name(), page.template_source())?;
        }

        Ok(Self { handlebars })
    }

    pub fn render<T: Serialize>(&self, page: Page, data: &T) -> Result<String, Error> {
        Ok(self.handlebars.render(page.template_name(), data)?)
    }
}
