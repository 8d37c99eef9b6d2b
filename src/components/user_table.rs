use yew::prelude::*;

use crate::models::heading::HEADINGS;
use crate::models::user::User;

pub const NO_DATA_MESSAGE: &str = "No Data Available";

const AVATAR_STYLE: &str =
    "border-radius: 50%; height: 5em; width: 5em; object-fit: cover; object-position: center;";
const CELL_CLASS: &str = "px-4 py-3 text-center text-2xl";

/// Display values of one user row.
#[derive(Clone, Debug, PartialEq)]
pub struct UserRow {
    pub id: String,
    pub avatar_src: String,
    pub avatar_alt: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl UserRow {
    pub fn new(user: &User, placeholder_avatar: &str) -> Self {
        Self {
            id: user.id.to_string(),
            avatar_src: user.avatar_url().unwrap_or(placeholder_avatar).to_string(),
            avatar_alt: format!("{}'s Avatar", user.first_name),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TableRow {
    Placeholder { colspan: usize },
    User(UserRow),
}

/// Rows of the table body: one per user, or a single placeholder spanning
/// every column when there are none.
pub fn table_rows(users: &[User], placeholder_avatar: &str) -> Vec<TableRow> {
    if users.is_empty() {
        return vec![TableRow::Placeholder {
            colspan: HEADINGS.len(),
        }];
    }
    users
        .iter()
        .map(|user| TableRow::User(UserRow::new(user, placeholder_avatar)))
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct UserTableProps {
    pub users: Vec<User>,
    pub placeholder_avatar: String,
}

#[function_component(UserTable)]
pub fn user_table(props: &UserTableProps) -> Html {
    let rows = table_rows(&props.users, &props.placeholder_avatar);

    html! {
        <table class="w-full bg-white rounded-lg shadow-md overflow-hidden">
            <thead class="bg-gray-100">
                <tr>
                    { for HEADINGS.iter().enumerate().map(|(index, heading)| html! {
                        <th key={index} class={format!("{} font-semibold text-gray-700", CELL_CLASS)}>
                            { heading.name }
                        </th>
                    }) }
                </tr>
            </thead>
            <tbody>
                { for rows.into_iter().enumerate().map(|(index, row)| view_row(index, row)) }
            </tbody>
        </table>
    }
}

fn view_row(index: usize, row: TableRow) -> Html {
    match row {
        TableRow::Placeholder { colspan } => html! {
            <tr key={index}>
                <td class={format!("{} text-gray-500", CELL_CLASS)} colspan={colspan.to_string()}>
                    { NO_DATA_MESSAGE }
                </td>
            </tr>
        },
        TableRow::User(user) => html! {
            <tr key={index} class="border-t border-gray-200">
                <td class={CELL_CLASS}>{ user.id }</td>
                <td class={CELL_CLASS}>
                    <img
                        class="inline-block"
                        src={user.avatar_src}
                        alt={user.avatar_alt}
                        loading="lazy"
                        style={AVATAR_STYLE}
                    />
                </td>
                <td class={CELL_CLASS}>{ user.email }</td>
                <td class={CELL_CLASS}>{ user.first_name }</td>
                <td class={CELL_CLASS}>{ user.last_name }</td>
            </tr>
        },
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::error::FetchError;
    use crate::models::directory::{Directory, PageOutcome};
    use crate::models::user::UserId;

    const PLACEHOLDER: &str = "static/avatar-placeholder.svg";

    fn user(id: i64, avatar: Option<&str>) -> User {
        User {
            id: UserId::Number(id),
            email: format!("user{}@reqres.in", id),
            first_name: "Emma".to_string(),
            last_name: "Wong".to_string(),
            avatar: avatar.map(str::to_string),
        }
    }

    #[test]
    fn empty_list_renders_one_placeholder_spanning_all_columns() {
        let rows = table_rows(&[], PLACEHOLDER);

        assert_eq!(rows, vec![TableRow::Placeholder { colspan: 5 }]);
    }

    #[test]
    fn both_pages_failing_renders_only_the_placeholder() {
        let mut directory = Directory::new();
        for page in 1..=2 {
            directory.settle(PageOutcome::Failed {
                page,
                error: FetchError::Transport {
                    url: format!("https://reqres.in/api/users?page={}", page),
                    message: "network unreachable".to_string(),
                },
            });
        }

        let rows = table_rows(directory.records(), PLACEHOLDER);

        assert_eq!(rows, vec![TableRow::Placeholder { colspan: 5 }]);
        assert_eq!(directory.failures().len(), 2);
    }

    #[test]
    fn one_row_per_user() {
        let users = vec![user(3, None), user(2, None), user(2, None), user(1, None)];

        let rows = table_rows(&users, PLACEHOLDER);

        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|row| matches!(row, TableRow::User(_))));
    }

    #[test]
    fn row_carries_user_fields() {
        let row = UserRow::new(
            &user(3, Some("https://reqres.in/img/faces/3-image.jpg")),
            PLACEHOLDER,
        );

        assert_eq!(
            row,
            UserRow {
                id: "3".to_string(),
                avatar_src: "https://reqres.in/img/faces/3-image.jpg".to_string(),
                avatar_alt: "Emma's Avatar".to_string(),
                email: "user3@reqres.in".to_string(),
                first_name: "Emma".to_string(),
                last_name: "Wong".to_string(),
            }
        );
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    fn missing_avatar_falls_back_to_placeholder(#[case] avatar: Option<&str>) {
        let row = UserRow::new(&user(1, avatar), PLACEHOLDER);

        assert_eq!(row.avatar_src, PLACEHOLDER);
    }
}
