//! Facade: one `download` call hides the HTTP client, file writer and logger
//! it coordinates.

use crate::console::Console;

#[derive(Debug, Default)]
pub struct HttpClient;

impl HttpClient {
    pub fn get(&self, url: &str) -> String {
        format!("SERVER DATA from {url}")
    }
}

#[derive(Debug, Default)]
pub struct FileWriter;

impl FileWriter {
    pub fn write(&self, path: &str, data: &str, out: &dyn Console) {
        out.line(&format!("Writing to {path}: {data}"));
    }
}

#[derive(Debug, Default)]
pub struct Logger;

impl Logger {
    pub fn info(&self, message: &str, out: &dyn Console) {
        out.line(&format!("[INFO] {message}"));
    }
}

#[derive(Debug, Default)]
pub struct FileDownloaderFacade {
    http: HttpClient,
    writer: FileWriter,
    logger: Logger,
}

impl FileDownloaderFacade {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch `url` and store it at `save_path`. Returns the number of bytes saved.
    pub fn download(&self, url: &str, save_path: &str, out: &dyn Console) -> usize {
        self.logger.info("Starting download", out);

        let data = self.http.get(url);
        self.logger.info(&format!("Downloaded {} bytes", data.len()), out);

        self.writer.write(save_path, &data, out);
        self.logger.info("File saved", out);
        data.len()
    }
}

pub fn demo(out: &dyn Console) {
    let downloader = FileDownloaderFacade::new();
    downloader.download("https://example.com/report.csv", "/tmp/report.csv", out);
}
