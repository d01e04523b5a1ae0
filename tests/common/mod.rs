//! Shared fixtures for integration tests.

use std::path::Path;

use settlements_web::config::AppConfig;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

pub const CITIES_CSV: &str = "\
n,region,municipality,settlement,type,population,children,a,b,c,lat,lon,d,e
1,Moscow oblast,Khimki,Khimki,city,250000,40000,x,x,x,55.89,37.44,x,x
2,Moscow oblast,Dmitrov,Dmitrov,city,70000,11000,x,x,x,56.34,37.52,x,x
3,Tver oblast,Rzhev,Rzhev,city,60000,9000,x,x,x,56.26,34.33,x,x
4,Tver oblast,Rzhev,Itomlya,village,800,90,x,x,x,56.20,34.10,x,x
5,Tver oblast,Rzhev,Empty,village,0,0,x,x,x,56.00,34.00,x,x
";

pub const TEMPLATE: &str = r#"<html>
<table>{% for row in table %}<tr><td>{{ row.type }}</td></tr>{% endfor %}</table>
<canvas data-points="{{ district_chart | json_encode() }}"></canvas>
</html>"#;

/// Writes the CSV and template fixtures and returns a config pointing at them.
///
/// Keep the returned `TempDir` alive for the duration of the test.
pub fn fixture_config() -> (TempDir, AppConfig) {
    let dir = tempfile::tempdir().unwrap();
    let cities = dir.path().join("cities.csv");
    let template = dir.path().join("index.html");
    let static_dir = dir.path().join("static");

    std::fs::write(&cities, CITIES_CSV).unwrap();
    std::fs::write(&template, TEMPLATE).unwrap();
    std::fs::create_dir(&static_dir).unwrap();
    std::fs::write(static_dir.join("app.js"), "console.log('ok');").unwrap();

    let mut config = AppConfig::default();
    config.server.bind_address = "127.0.0.1:0".into();
    config.data.cities_path = path_string(&cities);
    config.server.template_path = path_string(&template);
    config.server.static_dir = path_string(&static_dir);
    config.stats.longitude_buckets = 4;

    (dir, config)
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Minimal HTTP/1.1 GET over a raw socket; returns the full response text.
#[allow(dead_code)]
pub async fn raw_get(addr: std::net::SocketAddr, path: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!("GET {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();
    response
}
