use crate::{
    types::Artist,
    utils::{escape_html, format_number},
};

pub const TITLE: &str = "Top 50 Spotify Artists";
pub const DEFAULT_ARTIST_IMAGE: &str = "/default-artist.jpg";
pub const MAX_GENRE_TAGS: usize = 3;

const BASE_STYLE: &str = "
    body { font-family: Arial, sans-serif; margin: 0 auto; padding: 2rem; background-color: #121212; color: white; }
    h1 { color: #1DB954; font-size: 2.5rem; }
    p { color: #b3b3b3; font-size: 1.2rem; }";

const LANDING_STYLE: &str = "
    body { max-width: 1000px; text-align: center; }
    .login-button { display: inline-block; background-color: #1DB954; color: white; padding: 1rem 2rem;
                    text-decoration: none; border-radius: 500px; font-weight: bold; margin-top: 2rem; }
    .login-button:hover { background-color: #1ed760; transform: scale(1.05); transition: all 0.2s; }";

const GRID_STYLE: &str = "
    body { max-width: 1200px; }
    h1 { text-align: center; margin-bottom: 2rem; }
    .artists-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 2rem; padding: 1rem; }
    .artist-card { background: #282828; border-radius: 8px; padding: 1.5rem; transition: all 0.3s ease; }
    .artist-card:hover { transform: translateY(-5px); box-shadow: 0 10px 20px rgba(0,0,0,0.2); }
    .artist-image { width: 100%; height: 200px; object-fit: cover; border-radius: 4px; margin-bottom: 1rem; }
    .artist-name { font-size: 1.4rem; font-weight: bold; margin: 0.5rem 0; }
    .artist-stats { color: #b3b3b3; font-size: 0.9rem; }
    .genres { margin-top: 0.5rem; display: flex; flex-wrap: wrap; gap: 0.5rem; }
    .genre-tag { background: #1DB954; padding: 0.2rem 0.6rem; border-radius: 50px; font-size: 0.8rem; }
    .popularity-bar { width: 100%; height: 4px; background: #404040; border-radius: 2px; margin-top: 0.5rem; }
    .popularity-fill { height: 100%; background: #1DB954; border-radius: 2px; }";

fn document(style: &str, body: &str) -> String {
    format!(
        "<html>\n<head>\n<title>{TITLE}</title>\n<style>{BASE_STYLE}{style}\n</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n"
    )
}

/// Landing page with the button that starts the login flow.
pub fn render_home() -> String {
    document(
        LANDING_STYLE,
        &format!(
            "<h1>{TITLE}</h1>\n\
             <p>Discover the most popular artists on Spotify right now</p>\n\
             <a href=\"/login\" class=\"login-button\">View Top Artists</a>"
        ),
    )
}

/// Renders one card per artist, in the given order.
pub fn render_artists(artists: &[Artist]) -> String {
    let mut body = String::from("<h1>Top 50 Most Popular Artists on Spotify</h1>\n<div class=\"artists-grid\">\n");
    for artist in artists {
        body.push_str(&render_artist_card(artist));
    }
    body.push_str("</div>");

    document(GRID_STYLE, &body)
}

pub fn render_artist_card(artist: &Artist) -> String {
    let image_url = artist
        .images
        .first()
        .map(|image| image.url.as_str())
        .unwrap_or(DEFAULT_ARTIST_IMAGE);
    let name = escape_html(&artist.name);
    let popularity = artist.popularity.min(100);

    let mut card = format!(
        "<div class=\"artist-card\">\n\
         <img src=\"{image}\" alt=\"{name}\" class=\"artist-image\">\n\
         <h2 class=\"artist-name\">{name}</h2>\n\
         <div class=\"artist-stats\">\n\
         <div>Followers: {followers}</div>\n\
         <div>Popularity: {popularity}%</div>\n\
         <div class=\"popularity-bar\"><div class=\"popularity-fill\" style=\"width: {popularity}%\"></div></div>\n\
         </div>\n",
        image = escape_html(image_url),
        followers = format_number(artist.followers.total),
    );

    if !artist.genres.is_empty() {
        card.push_str("<div class=\"genres\">");
        for genre in artist.genres.iter().take(MAX_GENRE_TAGS) {
            card.push_str(&format!(
                "<span class=\"genre-tag\">{}</span>",
                escape_html(genre)
            ));
        }
        card.push_str("</div>\n");
    }

    card.push_str("</div>\n");
    card
}
