pub const TARGET: &str = "thumbv7em-none-eabihf";
pub const CHIP: &str = "nRF52840_xxAA";
pub const APP_MANIFEST: &str = "crates/twibridge-app/Cargo.toml";

pub fn app_elf(release: bool) -> String {
    let profile = if release { "release" } else { "debug" };
    format!("target/{}/{}/twibridge-app", TARGET, profile)
}
