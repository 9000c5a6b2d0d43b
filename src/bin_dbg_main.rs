use skiff::config::ServeConfig;
use skiff::http::connection::Connection;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

#[tokio::main]
async fn main() {
    let root = std::env::temp_dir().join("skiff-dbg");
    let _ = std::fs::remove_dir_all(&root);
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(root.join("photo.gif"), [0x47u8,0x49,0x46,0x38,0x39,0x61,0x00,0xff,0x01,0x02]).unwrap();

    let serve = ServeConfig {
        web_root: root.clone(),
        server_name: "Test Server".to_string(),
        read_timeout_secs: 1,
    };

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (socket, _peer) = listener.accept().await.unwrap();
        let mut conn = Connection::new(socket, serve);
        let _ = conn.run().await;
    });

    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(b"GET /photo.gif HTTP/1.1\r\n\r\n").await.unwrap();
    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.unwrap();
    println!("{:?}", String::from_utf8_lossy(&response));
}
