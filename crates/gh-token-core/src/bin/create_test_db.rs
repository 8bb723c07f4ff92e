use keepass::{config::DatabaseConfig, db::Node, db::Value, Database, DatabaseKey};
use std::fs::File;

fn token_entry(title: &str, token: &str) -> keepass::db::Entry {
    let mut entry = keepass::db::Entry::new();
    entry.fields.insert("Title".to_string(), Value::Unprotected(title.to_string()));
    entry.fields.insert("UserName".to_string(), Value::Unprotected("octocat".to_string()));
    entry.fields.insert("Password".to_string(), Value::Protected(token.as_bytes().into()));
    entry
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut db = Database::new(DatabaseConfig::default());
    db.meta.database_name = Some("gh-token test DB".to_string());

    let mut group = keepass::db::Group::new("GitHub");
    group.children.push(Node::Entry(token_entry("repo-admin (expires 2025-01-01)", "ghp_old_admin")));
    group.children.push(Node::Entry(token_entry("repo-admin (expires 2026-01-01)", "ghp_new_admin")));
    group.children.push(Node::Entry(token_entry("Packages", "ghp_packages")));
    group.children.push(Node::Entry(token_entry("actions", "ghp_actions")));
    db.root.children.push(Node::Group(group));

    // Recycle bin
    let mut bin = keepass::db::Group::new("Recycle Bin");
    bin.icon_id = Some(43);
    bin.children.push(Node::Entry(token_entry("deleted token", "ghp_deleted")));
    let bin_uuid = bin.uuid;
    db.root.children.push(Node::Group(bin));
    db.meta.recyclebin_uuid = Some(bin_uuid);
    db.meta.recyclebin_enabled = Some(true);

    let key = DatabaseKey::new().with_password("password");
    let mut file = File::create("test_db.kdbx")?;
    db.save(&mut file, key)?;

    println!("Created test_db.kdbx with password 'password'");
    Ok(())
}
