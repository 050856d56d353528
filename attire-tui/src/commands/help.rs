// File: attire-tui/src/commands/help.rs

pub fn show_command_help(topic: &str) -> String {
    match topic.to_lowercase().as_str() {
        "go" => r#"go <path>
  Navigate directly to a page, optionally with a query:
    go /                     home
    go /shop                 the full catalog
    go /shop?region=East+Asia  catalog pre-filtered by region
    go /shop/3               product detail for item 3
    go /try-on               virtual try-on
    go /try-on?item=2        try-on with item 2 already picked
    go /size-guide           size charts and converter
    go /community            fashion feed
    go /profile/me           your profile
"#
        .to_string(),
        "login" | "logout" | "whoami" => r#"Account:
  login <name> [location]   sign in (location defaults to "Unknown")
  logout                     sign out
  whoami                     show the signed-in user
"#
        .to_string(),
        "shop" => r#"shop
  shop                      list items matching the current filter
  shop search <text>        text search over name/description/origin
  shop region <region>      filter by region ("any" clears)
  shop category <category>  filter by category ("any" clears)
  shop price <min> <max>    inclusive price bounds
  shop clear                reset every filter
  shop show <id>            product detail
  shop fav <id>             toggle an item in your favorites
"#
        .to_string(),
        "tryon" | "try-on" => r#"tryon
  tryon                     show where you are in the flow
  tryon photo [url]         upload a photo (no url = use the camera)
  tryon items               list garments to pick from
  tryon select <id>         pick a garment
  tryon render              generate the try-on image
  tryon change              pick a different garment, keep the photo
  tryon reset               start over from the photo step
  tryon history             your past try-on sessions
"#
        .to_string(),
        "sizeguide" | "size-guide" => r#"sizeguide
  sizeguide                 show the current chart
  sizeguide region <region> switch region
  sizeguide gender <w|m>    switch between women's and men's charts
  sizeguide regions         list regions with charts
  sizeguide find <chest> [waist hips inseam shoulder]
                            recommend a size from measurements
"#
        .to_string(),
        "community" => r#"community
  community                 show the fashion feed
  community post <text>     share an outfit (requires login)
  community like <index>    like the post at that feed position
"#
        .to_string(),
        "profile" => r#"profile
  profile                   your profile overview (requires login)
  profile posts             your posts
  profile tryons            your try-on history
  profile favorites         your favorited items
  profile export            dump your profile data as JSON
"#
        .to_string(),
        "" => r#"Commands:
  home                      go to the home page
  go <path>                 navigate to any page by path
  login/logout/whoami       account
  shop [...]                browse and filter the catalog
  tryon [...]               virtual try-on
  sizeguide [...]           size charts and converter
  community [...]           fashion feed
  profile [...]             your profile
  help [command]            this help
  quit                      exit

Type 'help <command>' for details.
"#
        .to_string(),
        other => format!("No help for '{}'. Type 'help' for the command list.", other),
    }
}
