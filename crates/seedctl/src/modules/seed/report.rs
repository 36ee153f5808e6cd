use crate::modules::seed::descriptors::SeedUser;

/// Credentials for every descriptor, printed after the loop regardless of
/// whether each account was created this run or on a previous one.
pub(crate) fn print_credentials_table(users: &[SeedUser]) {
    println!();
    println!("Test account credentials:");
    println!();
    print!("{}", render_credentials_table(users));
    println!();
    println!("Log out, sign in with one of the accounts above, and verify");
    println!("role-specific access at the dashboard.");
}

fn render_credentials_table(users: &[SeedUser]) -> String {
    let mut role_width = "ROLE".len();
    let mut email_width = "EMAIL".len();
    for user in users {
        role_width = role_width.max(user.role_name.len());
        email_width = email_width.max(user.email.len());
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{:<role_width$}  {:<email_width$}  PASSWORD\n",
        "ROLE", "EMAIL"
    ));
    for user in users {
        out.push_str(&format!(
            "{:<role_width$}  {:<email_width$}  {}\n",
            user.role_name, user.email, user.password
        ));
    }
    out
}
