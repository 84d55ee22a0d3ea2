use clap::Parser;

#[derive(Parser, Clone, Debug)]
pub struct Config {
    #[clap(env, long)]
    pub google_maps_api_key: String,

    #[clap(env, long, default_value_t = 3000)]
    pub port: u16,

    /// Address searched around when the caller gives no location or asks for "near me"
    #[clap(env, long, default_value = "Jakarta, Indonesia")]
    pub default_location: String,

    #[clap(env, long, default_value = "https://maps.googleapis.com/maps/api")]
    pub google_maps_base_url: String,

    /// Bias radius around the geocoded address for place text searches
    #[clap(env, long, default_value_t = 5000)]
    pub search_radius_meters: u32,

    #[clap(env, long, default_value_t = 10)]
    pub request_timeout_secs: u64,

    /// Comma separated list of allowed CORS origins, `*` allows any
    #[clap(env, long, default_value = "*")]
    pub origin_urls: String,
}
