#[macro_export]
macro_rules! get {
    ($url:expr) => {{
        use $crate::http::{Headers, ResponseHandler};

        $crate::http::HttpClient::new()
            .get($url)
            .default_headers()
            .send()
            .await
            .handle()
            .await
    }};
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use mockito::Server;

    #[tokio::test]
    async fn get_macro() -> Result<()> {
        let mut server = Server::new_async().await;
        let url = server.url();

        let expected_body = "[]";

        let m = server
            .mock("GET", "/")
            .match_header("accept", "application/vnd.github+json")
            .match_header("x-github-api-version", "2022-11-28")
            .match_header("user-agent", "reposcanner")
            .match_header("authorization", mockito::Matcher::Missing)
            .with_body(expected_body)
            .create_async()
            .await;

        let response = get!(&url)?;

        m.assert_async().await;
        assert_eq!(response.status, 200);
        assert_eq!(response.body, expected_body);

        Ok(())
    }

    #[tokio::test]
    async fn get_macro_keeps_error_responses() -> Result<()> {
        let mut server = Server::new_async().await;
        let url = format!("{}/users/ghost/repos", server.url());

        let m = server
            .mock("GET", "/users/ghost/repos")
            .with_status(404)
            .with_body("{\"message\":\"Not Found\"}")
            .create_async()
            .await;

        let response = get!(&url)?;

        m.assert_async().await;
        assert_eq!(response.status, 404);
        assert_eq!(response.body, "{\"message\":\"Not Found\"}");

        Ok(())
    }
}
