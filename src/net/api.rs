//! Typed backend surface: endpoint paths plus one method per operation.
//!
//! All methods live on [`ApiClient`] so every call flows through the session
//! and triage behavior in `net::http`. Methods are browser-only (hydrate);
//! the path constants and formatters are compiled everywhere so they stay
//! unit-testable.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::types::SourceKind;

// User auth routes.
pub const USER_LOGIN: &str = "/user/login";
pub const USER_SIGNUP: &str = "/user/signUp";
pub const USER_FORGOT_PASSWORD: &str = "/user/forgotPassword";
pub const USER_VERIFY_FORGOT_EMAIL: &str = "/user/verifyForgotEmail";
pub const USER_RESET_PASSWORD: &str = "/user/changeForgotPassword";
pub const USER_VERIFY_EMAIL: &str = "/user/emailVerification";
pub const USER_CHANGE_PASSWORD: &str = "/user/changePassword";

// API key routes.
pub const APIKEY_LIST: &str = "/apikey/listAPIKey";
pub const APIKEY_GENERATE: &str = "/apikey/generateAPIKey";

// Chatbot routes.
pub const CHATBOT_LIST: &str = "/chatbot/listChatBot";
pub const CHATBOT_CREATE: &str = "/chatbot/createChatBot";
pub const CHATBOT_UPDATE: &str = "/chatbot/updateChatBot";

// Vector store routes.
pub const VECTORS_UPLOAD: &str = "/vectors/upload";
pub const VECTORS_REMOVE: &str = "/vectors/removeVectors";

// Question answering.
pub const QA_PLAYGROUND: &str = "/qa/playground";
pub const QA_ASK_QUESTION: &str = "/qa/askquestion";

pub fn chatbot_by_id_endpoint(bot_id: &str) -> String {
    format!("/chatbot/getById/{bot_id}")
}

pub fn chatbot_delete_endpoint(bot_id: &str) -> String {
    format!("/chatbot/deleteChatBot/{bot_id}")
}

pub fn apikey_delete_endpoint(key_id: &str) -> String {
    format!("/apikey/deleteAPIKey/{key_id}")
}

pub fn documents_list_endpoint(bot_id: &str, kind: SourceKind) -> String {
    format!(
        "/vectors/getDocumentsList/{bot_id}?documentType={}",
        kind.code()
    )
}

#[cfg(feature = "hydrate")]
mod calls {
    use serde_json::Value;

    use super::*;
    use crate::net::http::{ApiClient, ApiError};
    use crate::net::types::{
        ApiKeyListData, AskRequest, AuthTokenResponse, Chatbot, Envelope, GenerateApiKeyResponse,
        HistoryEntry, LoginData, LoginRequest, SignupRequest, SourceDocument,
    };

    impl ApiClient {
        // --- auth ---

        pub async fn login(&self, request: &LoginRequest) -> Result<Envelope<LoginData>, ApiError> {
            self.post_json(USER_LOGIN, request).await
        }

        pub async fn signup(&self, request: &SignupRequest) -> Result<Envelope<Value>, ApiError> {
            self.post_json(USER_SIGNUP, request).await
        }

        pub async fn forgot_password(&self, email: &str) -> Result<Envelope<Value>, ApiError> {
            self.post_json(USER_FORGOT_PASSWORD, &serde_json::json!({ "email": email }))
                .await
        }

        pub async fn verify_forgot_email(&self, token: &str) -> Result<Envelope<Value>, ApiError> {
            self.post_json(
                USER_VERIFY_FORGOT_EMAIL,
                &serde_json::json!({ "token": token }),
            )
            .await
        }

        /// Reset a forgotten password; the reset token stands in for the
        /// bearer credential.
        pub async fn change_forgot_password(
            &self,
            password: &str,
            reset_token: &str,
        ) -> Result<AuthTokenResponse, ApiError> {
            self.post_json_with_bearer(
                USER_RESET_PASSWORD,
                &serde_json::json!({ "password": password }),
                reset_token,
            )
            .await
        }

        pub async fn verify_email(&self, token: &str) -> Result<AuthTokenResponse, ApiError> {
            self.post_json(USER_VERIFY_EMAIL, &serde_json::json!({ "token": token }))
                .await
        }

        pub async fn change_password(&self, password: &str) -> Result<Envelope<Value>, ApiError> {
            self.post_json(
                USER_CHANGE_PASSWORD,
                &serde_json::json!({ "password": password }),
            )
            .await
        }

        // --- API keys ---

        pub async fn list_api_keys(&self) -> Result<Envelope<ApiKeyListData>, ApiError> {
            self.get_json(APIKEY_LIST).await
        }

        pub async fn generate_api_key(
            &self,
            name: &str,
        ) -> Result<GenerateApiKeyResponse, ApiError> {
            self.post_json(APIKEY_GENERATE, &serde_json::json!({ "name": name }))
                .await
        }

        pub async fn delete_api_key(&self, key_id: &str) -> Result<Envelope<Value>, ApiError> {
            self.post_empty(&apikey_delete_endpoint(key_id)).await
        }

        // --- chatbots ---

        pub async fn list_chatbots(&self) -> Result<Envelope<Vec<Chatbot>>, ApiError> {
            self.get_json(CHATBOT_LIST).await
        }

        pub async fn create_chatbot(&self, name: &str) -> Result<Envelope<Value>, ApiError> {
            self.post_json(CHATBOT_CREATE, &serde_json::json!({ "name": name }))
                .await
        }

        pub async fn get_chatbot(&self, bot_id: &str) -> Result<Envelope<Chatbot>, ApiError> {
            self.get_json(&chatbot_by_id_endpoint(bot_id)).await
        }

        pub async fn update_chatbot(
            &self,
            bot_id: &str,
            name: &str,
        ) -> Result<Envelope<Value>, ApiError> {
            self.post_json(
                CHATBOT_UPDATE,
                &serde_json::json!({ "botId": bot_id, "name": name }),
            )
            .await
        }

        pub async fn delete_chatbot(&self, bot_id: &str) -> Result<Envelope<Value>, ApiError> {
            self.post_empty(&chatbot_delete_endpoint(bot_id)).await
        }

        // --- document sources ---

        pub async fn list_documents(
            &self,
            bot_id: &str,
            kind: SourceKind,
        ) -> Result<Envelope<Vec<SourceDocument>>, ApiError> {
            self.get_json(&documents_list_endpoint(bot_id, kind)).await
        }

        pub async fn upload_text(
            &self,
            bot_id: &str,
            title: &str,
            content: &str,
        ) -> Result<Envelope<Value>, ApiError> {
            self.post_json(
                VECTORS_UPLOAD,
                &serde_json::json!({
                    "botId": bot_id,
                    "documentType": SourceKind::Text.code(),
                    "title": title,
                    "content": content,
                }),
            )
            .await
        }

        pub async fn upload_website(
            &self,
            bot_id: &str,
            url: &str,
        ) -> Result<Envelope<Value>, ApiError> {
            self.post_json(
                VECTORS_UPLOAD,
                &serde_json::json!({
                    "botId": bot_id,
                    "documentType": SourceKind::Website.code(),
                    "url": url,
                }),
            )
            .await
        }

        /// Upload one file as an independent multipart request tagged with
        /// the owning bot and the file discriminator.
        pub async fn upload_file(
            &self,
            bot_id: &str,
            file: &web_sys::File,
        ) -> Result<Envelope<Value>, ApiError> {
            let form = web_sys::FormData::new()
                .map_err(|e| ApiError::Network(format!("{e:?}")))?;
            form.append_with_blob_and_filename("file", file, &file.name())
                .map_err(|e| ApiError::Network(format!("{e:?}")))?;
            form.append_with_str("botId", bot_id)
                .map_err(|e| ApiError::Network(format!("{e:?}")))?;
            form.append_with_str("documentType", SourceKind::File.code())
                .map_err(|e| ApiError::Network(format!("{e:?}")))?;
            self.post_multipart(VECTORS_UPLOAD, form).await
        }

        /// Remove a file source's vectors, addressed by filename.
        pub async fn remove_document_by_name(
            &self,
            bot_id: &str,
            file_name: &str,
        ) -> Result<Envelope<Value>, ApiError> {
            self.post_json(
                VECTORS_REMOVE,
                &serde_json::json!({ "fileName": file_name, "botId": bot_id }),
            )
            .await
        }

        /// Remove a text or website source's vectors, addressed by document id.
        pub async fn remove_document_by_id(
            &self,
            bot_id: &str,
            document_id: &str,
        ) -> Result<Envelope<Value>, ApiError> {
            self.post_json(
                VECTORS_REMOVE,
                &serde_json::json!({ "documentId": document_id, "botId": bot_id }),
            )
            .await
        }

        // --- question answering ---

        /// Ask a question in the dashboard preview; the answer text comes
        /// back in `data`.
        pub async fn ask_playground(
            &self,
            bot_id: &str,
            history: Vec<HistoryEntry>,
            question: &str,
        ) -> Result<Envelope<String>, ApiError> {
            self.post_json(
                QA_PLAYGROUND,
                &AskRequest {
                    bot_id: bot_id.to_owned(),
                    chat_history: history,
                    question: question.to_owned(),
                },
            )
            .await
        }

        /// Ask a question through the external integration endpoint,
        /// authenticated with an API key instead of the session credential.
        pub async fn ask_question(
            &self,
            api_key: &str,
            bot_id: &str,
            history: Vec<HistoryEntry>,
            question: &str,
        ) -> Result<Envelope<String>, ApiError> {
            self.post_json_with_api_key(
                QA_ASK_QUESTION,
                &AskRequest {
                    bot_id: bot_id.to_owned(),
                    chat_history: history,
                    question: question.to_owned(),
                },
                api_key,
            )
            .await
        }
    }
}
