use super::*;

#[test]
fn chatbot_by_id_endpoint_formats_expected_path() {
    assert_eq!(chatbot_by_id_endpoint("b123"), "/chatbot/getById/b123");
}

#[test]
fn chatbot_delete_endpoint_formats_expected_path() {
    assert_eq!(chatbot_delete_endpoint("b123"), "/chatbot/deleteChatBot/b123");
}

#[test]
fn apikey_delete_endpoint_formats_expected_path() {
    assert_eq!(apikey_delete_endpoint("k9"), "/apikey/deleteAPIKey/k9");
}

#[test]
fn documents_list_endpoint_carries_the_type_discriminator() {
    assert_eq!(
        documents_list_endpoint("b1", SourceKind::File),
        "/vectors/getDocumentsList/b1?documentType=D"
    );
    assert_eq!(
        documents_list_endpoint("b1", SourceKind::Text),
        "/vectors/getDocumentsList/b1?documentType=T"
    );
    assert_eq!(
        documents_list_endpoint("b1", SourceKind::Website),
        "/vectors/getDocumentsList/b1?documentType=W"
    );
}
