//! Longest-prefix routing keyed by url::Url paths
use radix_tree::Tree;
use url::Url;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut routes = Tree::new();

    // Register handlers by path prefix
    routes.insert("/", "static files");
    routes.insert("/api", "api index");
    routes.insert("/api/users", "user service");
    routes.insert("/api/users/admin", "admin console");
    routes.insert("/blog", "blog");

    let requests = [
        "https://example.com/api/users/42",
        "https://example.com/api/users/admin/settings",
        "https://example.com/blog/first-post",
        "https://example.com/favicon.ico",
    ];

    println!("Routing requests:");
    for raw in requests.iter() {
        let url = Url::parse(raw)?;
        match routes.longest_prefix(url.path()) {
            Some((prefix, handler)) => {
                println!("  {} -> {} (via {})", url, handler, String::from_utf8_lossy(&prefix))
            }
            None => println!("  {} -> no route", url),
        }
    }

    // Every route a request passes through, outermost first
    let deep = Url::parse("https://example.com/api/users/admin/settings")?;
    println!("\nMiddleware chain for {}:", deep.path());
    routes.walk_path(deep.path(), |prefix, handler| {
        println!("  {} ({})", String::from_utf8_lossy(prefix), handler);
        false
    });

    // Retire the whole user API, including nested routes
    let removed = routes.delete_prefix("/api/users");
    println!("\nRemoved {} routes, {} remaining", removed, routes.len());

    Ok(())
}
