use yew::prelude::*;

use crate::components::user_table::UserTable;
use crate::config::DirectoryConfig;
use crate::error::FetchError;
use crate::models::directory::{Directory, PageOutcome};
use crate::services::lifetime::LifetimeToken;
use crate::services::users_api::fetch_users;

pub enum Msg {
    PageSettled(PageOutcome),
}

#[derive(Properties, PartialEq)]
pub struct UserDirectoryProps {
    #[prop_or_default]
    pub config: DirectoryConfig,
}

/// Loads every configured page concurrently and shows the merged users.
pub struct UserDirectory {
    directory: Directory,
    // Aborts outstanding requests when dropped.
    lifetime: Option<LifetimeToken>,
}

impl UserDirectory {
    fn failure_notice(&self) -> Html {
        let failed = self.directory.failures().len();
        if failed == 0 {
            return html! {};
        }
        let pages = if failed == 1 { "page" } else { "pages" };
        html! {
            <p class="text-sm text-red-600" role="status">
                { format!("{} {} of users could not be loaded.", failed, pages) }
            </p>
        }
    }
}

impl Component for UserDirectory {
    type Message = Msg;
    type Properties = UserDirectoryProps;

    fn create(ctx: &Context<Self>) -> Self {
        let lifetime = match LifetimeToken::new() {
            Ok(token) => Some(token),
            Err(err) => {
                log::error!("{}", err);
                None
            }
        };
        let mut directory = Directory::new();

        match &lifetime {
            Some(token) => {
                for (index, url) in ctx.props().config.endpoints.iter().enumerate() {
                    let page = index + 1;
                    let url = url.clone();
                    let signal = token.signal();
                    log::debug!("requesting page {} from {}", page, url);
                    ctx.link().send_future(async move {
                        let result = fetch_users(&url, &signal).await;
                        Msg::PageSettled(PageOutcome::from_result(page, result))
                    });
                }
            }
            None => {
                for (index, url) in ctx.props().config.endpoints.iter().enumerate() {
                    directory.settle(PageOutcome::Failed {
                        page: index + 1,
                        error: FetchError::Setup(format!(
                            "request to {} was not started",
                            url
                        )),
                    });
                }
            }
        }

        Self {
            directory,
            lifetime,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::PageSettled(outcome) => {
                let changed = self.directory.settle(outcome);
                if changed && self.directory.settled() == ctx.props().config.endpoints.len() {
                    log::debug!(
                        "all pages settled: {} users, {} failed pages",
                        self.directory.records().len(),
                        self.directory.failures().len()
                    );
                }
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <main class="container mx-auto min-h-screen py-8 px-4">
                <section class="flex flex-col w-full space-y-4">
                    <h2 class="text-5xl font-light text-gray-900">{ "Users" }</h2>
                    <UserTable
                        users={self.directory.records().to_vec()}
                        placeholder_avatar={ctx.props().config.placeholder_avatar.clone()}
                    />
                    { self.failure_notice() }
                </section>
            </main>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.directory.close();
        if let Some(token) = self.lifetime.take() {
            token.cancel();
        }
    }
}
