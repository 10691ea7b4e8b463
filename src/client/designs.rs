//! Design operations: create, upload artwork, fetch details, set logo color.

use reqwest::multipart;
use tracing::debug;

use super::{ClientError, SwagUpClient, parse_response};
use crate::objects::design::{
    DesignCreated, DesignDetails, LogoColor, LogoColorSet, NewDesign, SetLogoColorRequest,
};
use crate::objects::image::ImageUploaded;

impl SwagUpClient {
    /// `POST /designs` – create a new design.
    ///
    /// Rejects a negative price locally, before any request is issued.
    pub async fn create_design(&self, design: NewDesign) -> Result<DesignCreated, ClientError> {
        if design.price.is_sign_negative() {
            return Err(ClientError::InvalidRequest(
                "price must be non-negative".to_owned(),
            ));
        }

        let url = self.endpoint("/designs")?;
        debug!(designer_id = %design.designer_id, "creating design");

        let resp = self.post(url).json(&design).send().await?;
        parse_response(resp).await
    }

    /// `POST /images` – upload an artwork image as the multipart form
    /// field `image`.
    ///
    /// The bytes are sent in one request body; there is no streaming or
    /// chunked upload.
    pub async fn upload_image(
        &self,
        file_name: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<ImageUploaded, ClientError> {
        let url = self.endpoint("/images")?;
        let file_name = file_name.into();
        debug!(%file_name, size = bytes.len(), "uploading image");

        let part = multipart::Part::bytes(bytes).file_name(file_name);
        let form = multipart::Form::new().part("image", part);

        let resp = self.post(url).multipart(form).send().await?;
        parse_response(resp).await
    }

    /// `GET /designs/{id}` – fetch the full record of a design, including
    /// image metadata once artwork has been uploaded.
    pub async fn get_design_details(&self, design_id: &str) -> Result<DesignDetails, ClientError> {
        let url = self.endpoint(&format!("/designs/{design_id}"))?;
        debug!(design_id, "fetching design details");

        let resp = self.get(url).send().await?;
        parse_response(resp).await
    }

    /// `POST /logo-color` – set the logo color of a design, replacing any
    /// previously chosen color.
    pub async fn choose_logo_color(
        &self,
        design_id: impl Into<String>,
        color: LogoColor,
    ) -> Result<LogoColorSet, ClientError> {
        let url = self.endpoint("/logo-color")?;
        let payload = SetLogoColorRequest {
            color,
            design_id: design_id.into(),
        };
        debug!(design_id = %payload.design_id, color = %payload.color.name, "choosing logo color");

        let resp = self.post(url).json(&payload).send().await?;
        parse_response(resp).await
    }
}
