/// Label of one column of the users table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Heading {
    pub name: &'static str,
}

pub const HEADINGS: [Heading; 5] = [
    Heading { name: "#" },
    Heading { name: "Avatar" },
    Heading { name: "Email" },
    Heading { name: "First Name" },
    Heading { name: "Last Name" },
];
