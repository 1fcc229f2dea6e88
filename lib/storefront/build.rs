fn main() {
    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-env-changed=MUSIC_PROXY_URL");

    // Lets a local .env point the build at another proxy origin.
    if let Ok(url) = dotenvy::var("MUSIC_PROXY_URL") {
        println!("cargo:rustc-env=MUSIC_PROXY_URL={url}");
    }
}
