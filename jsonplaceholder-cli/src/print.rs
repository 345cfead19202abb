use jsonplaceholder::User;
use std::io::Write;

/// The width of the separator line printed after each user block.
const SEPARATOR_WIDTH: usize = 24;

/// Write a block per user to the given writer,
/// optionally keeping only users whose city starts with the given prefix.
///
/// The prefix match is case-insensitive and an empty prefix means no
/// filtering. A user without a real city string never matches a prefix.
/// Printed numbers count matches, so a filtered-out user does not
/// consume a number. If nothing matched, a single note line is written
/// instead.
pub fn write_users<W>(
    writer: &mut W,
    users: &[User],
    starts_with: Option<&str>,
) -> std::io::Result<()>
where
    W: Write,
{
    let prefix = starts_with
        .filter(|prefix| !prefix.is_empty())
        .map(str::to_lowercase);

    let mut matched = 0;
    for user in users {
        if let Some(prefix) = prefix.as_deref() {
            let city_matches = user
                .city()
                .is_some_and(|city| city.to_lowercase().starts_with(prefix));
            if !city_matches {
                continue;
            }
        }

        matched += 1;
        writeln!(writer, "User {matched}:")?;
        writeln!(writer, "Name: {}", user.display_name())?;
        writeln!(writer, "Username: {}", user.display_username())?;
        writeln!(writer, "Email: {}", user.display_email())?;
        writeln!(writer, "City: {}", user.display_city())?;
        writeln!(writer, "{}", "-".repeat(SEPARATOR_WIDTH))?;
    }

    if matched == 0 {
        writeln!(writer, "No users matched the filter.")?;
    }

    Ok(())
}
