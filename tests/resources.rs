//! Integration tests for resource operations against a `wiremock` server.
//!
//! Each test mounts the endpoint it expects, drives the public client API and
//! checks both the decoded result and the exact request that went out.

use insightly_client::{
    ClientConfig, Insightly, InsightlyError, ListOptions, SubResource, models::NewComment,
};
use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

type TestResult = Result<(), InsightlyError>;

// base64("key:")
const AUTH_HEADER: &str = "Basic a2V5Og==";

fn client(server: &MockServer) -> Result<Insightly, InsightlyError> {
    Insightly::with_config(ClientConfig::new("key").with_base_url(server.uri()))
}

async fn last_query(server: &MockServer) -> Option<String> {
    let requests = server.received_requests().await?;
    requests.last()?.url.query().map(str::to_string)
}

mod listing {
    use super::{
        AUTH_HEADER, InsightlyError, ListOptions, Mock, MockServer, ResponseTemplate, TestResult,
        Value, client, header, json, last_query, method, path, query_param,
    };

    #[tokio::test]
    async fn contacts_list_sends_odata_in_call_order() -> TestResult {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2.1/Contacts"))
            .and(header("Authorization", AUTH_HEADER))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{ "CONTACT_ID": 1 }, { "CONTACT_ID": 2 }])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let contacts: Vec<Value> = client(&server)?
            .contacts()
            .list(&ListOptions::new().order_by("DATE_UPDATED_UTC desc").top(5))
            .await?;

        assert_eq!(contacts.len(), 2);
        assert_eq!(
            last_query(&server).await.as_deref(),
            Some("$orderby=DATE_UPDATED_UTC+desc&$top=5")
        );
        Ok(())
    }

    #[tokio::test]
    async fn filters_and_resource_options_are_appended() -> TestResult {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2.1/Leads"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let options = ListOptions::new()
            .filter("AGE>21")
            .filter("NAME=Bob")
            .skip(10)
            .email("bob@example.com")
            .tag("vip")
            .ids([4, 8]);
        let leads: Vec<Value> = client(&server)?.leads().list(&options).await?;

        assert!(leads.is_empty());
        assert_eq!(
            last_query(&server).await.as_deref(),
            Some(
                "$filter=AGE+gt+21&$filter=NAME+eq+Bob&$skip=10&email=bob%40example.com&tag=vip&ids=4%2C8"
            )
        );
        Ok(())
    }

    #[tokio::test]
    async fn list_without_options_has_no_query_string() -> TestResult {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2.1/Countries"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "COUNTRY_NAME": "Ireland" }])))
            .mount(&server)
            .await;

        let countries: Vec<Value> = client(&server)?.countries().list(&ListOptions::new()).await?;

        assert_eq!(countries[0]["COUNTRY_NAME"], "Ireland");
        assert_eq!(last_query(&server).await, None);
        Ok(())
    }

    #[tokio::test]
    async fn team_members_are_listed_by_team() -> TestResult {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2.1/TeamMembers"))
            .and(query_param("teamid", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "PERMISSION_ID": 1, "TEAM_ID": 3 }])))
            .expect(1)
            .mount(&server)
            .await;

        let members: Vec<insightly_client::models::TeamMember> = client(&server)?
            .team_members()
            .list(&ListOptions::new().team_id(3))
            .await?;

        assert_eq!(members[0].team_id, 3);
        Ok(())
    }

    #[tokio::test]
    async fn unsupported_option_never_reaches_the_server() -> TestResult {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&server)
            .await;

        let result = client(&server)?
            .notes()
            .list::<Value>(&ListOptions::new().tag("vip"))
            .await;

        assert!(matches!(
            result,
            Err(InsightlyError::UnsupportedOption { resource: "Notes", option: "tag" })
        ));
        Ok(())
    }
}

mod records {
    use super::{
        InsightlyError, ListOptions, Mock, MockServer, Request, ResponseTemplate, TestResult, Value,
        body_json, client, header, json, method, path,
    };

    #[tokio::test]
    async fn get_fetches_by_id() -> TestResult {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2.1/Opportunities/77"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "OPPORTUNITY_ID": 77 })))
            .mount(&server)
            .await;

        let opportunity: Value = client(&server)?.opportunities().get(77).await?;

        assert_eq!(opportunity["OPPORTUNITY_ID"], 77);
        Ok(())
    }

    #[tokio::test]
    async fn upsert_with_positive_id_updates() -> TestResult {
        let server = MockServer::start().await;
        let payload = json!({ "CONTACT_ID": 5, "FIRST_NAME": "Bob" });
        Mock::given(method("PUT"))
            .and(path("/v2.1/Contacts"))
            .and(header("Content-Type", "application/json"))
            .and(body_json(&payload))
            .respond_with(ResponseTemplate::new(200).set_body_json(&payload))
            .expect(1)
            .mount(&server)
            .await;

        let updated: Value = client(&server)?.contacts().upsert(&payload).await?;

        assert_eq!(updated, payload);
        Ok(())
    }

    #[tokio::test]
    async fn upsert_without_id_creates() -> TestResult {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2.1/Events"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "EVENT_ID": 12, "TITLE": "Demo" })))
            .expect(2)
            .mount(&server)
            .await;

        let insightly = client(&server)?;
        let created: Value = insightly.events().upsert(&json!({ "TITLE": "Demo" })).await?;
        let zero_id: Value = insightly
            .events()
            .upsert(&json!({ "EVENT_ID": 0, "TITLE": "Demo" }))
            .await?;

        assert_eq!(created["EVENT_ID"], 12);
        assert_eq!(zero_id["EVENT_ID"], 12);
        Ok(())
    }

    #[tokio::test]
    async fn upsert_body_round_trips_through_an_echo() -> TestResult {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2.1/Notes"))
            .respond_with(|req: &Request| ResponseTemplate::new(200).set_body_bytes(req.body.clone()))
            .mount(&server)
            .await;

        let note = json!({
            "TITLE": "Call back",
            "BODY": "Wants a quote",
            "LINK_SUBJECT_ID": 4,
            "tags": ["a", "b"],
            "nested": { "flag": true, "ratio": 0.5 }
        });
        let echoed: Value = client(&server)?.notes().upsert(&note).await?;

        assert_eq!(echoed, note);
        Ok(())
    }

    #[tokio::test]
    async fn team_members_are_created_and_updated_explicitly() -> TestResult {
        let server = MockServer::start().await;
        let member = insightly_client::models::sample_team_member();
        Mock::given(method("POST"))
            .and(path("/v2.1/TeamMembers"))
            .respond_with(ResponseTemplate::new(201).set_body_json(&member))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/v2.1/TeamMembers"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&member))
            .expect(1)
            .mount(&server)
            .await;

        let insightly = client(&server)?;
        let created: Value = insightly.team_members().create(&member).await?;
        let updated: Value = insightly.team_members().update(&member).await?;

        assert_eq!(created, updated);
        // No id field in the catalog, so upsert is refused.
        assert!(matches!(
            insightly.team_members().upsert::<_, Value>(&member).await,
            Err(InsightlyError::UnsupportedOperation { operation: "upsert", .. })
        ));
        Ok(())
    }

    #[tokio::test]
    async fn delete_discards_the_body_and_reports_success() -> TestResult {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/v2.1/Tasks/9"))
            .respond_with(ResponseTemplate::new(202).set_body_string("not json at all"))
            .expect(1)
            .mount(&server)
            .await;

        assert!(client(&server)?.tasks().delete(9).await?);
        Ok(())
    }

    #[tokio::test]
    async fn read_only_resources_refuse_writes() -> TestResult {
        let server = MockServer::start().await;
        let insightly = client(&server)?;

        assert!(matches!(
            insightly.countries().delete(1).await,
            Err(InsightlyError::UnsupportedOperation { resource: "Countries", operation: "delete" })
        ));
        assert!(matches!(
            insightly.users().create::<_, Value>(&json!({})).await,
            Err(InsightlyError::UnsupportedOperation { operation: "create", .. })
        ));
        assert!(matches!(
            insightly.tags().list::<Value>(&ListOptions::new()).await,
            Err(InsightlyError::UnsupportedOperation { operation: "list", .. })
        ));
        Ok(())
    }
}

mod nested {
    use super::{
        InsightlyError, Mock, MockServer, NewComment, ResponseTemplate, SubResource, TestResult,
        Value, body_json, client, json, method, path,
    };

    #[tokio::test]
    async fn nested_collections_hang_off_the_parent() -> TestResult {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2.1/Organisations/31/Tasks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "TASK_ID": 1 }])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v2.1/Opportunities/8/StateHistory"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let insightly = client(&server)?;
        let tasks: Vec<Value> = insightly.organizations().nested(31, SubResource::Tasks).await?;
        let history: Vec<Value> = insightly
            .opportunities()
            .nested(8, SubResource::StateHistory)
            .await?;

        assert_eq!(tasks.len(), 1);
        assert!(history.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn unknown_child_collection_is_rejected() -> TestResult {
        let server = MockServer::start().await;
        let result = client(&server)?
            .contacts()
            .nested::<Value>(1, SubResource::StateHistory)
            .await;

        assert!(matches!(
            result,
            Err(InsightlyError::UnsupportedOperation { operation: "StateHistory", .. })
        ));
        Ok(())
    }

    #[tokio::test]
    async fn email_comment_is_posted_under_the_email() -> TestResult {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2.1/Emails/15/Comments"))
            .and(body_json(json!({ "BODY": "Looks good", "OWNER_USER_ID": 2 })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "COMMENT_ID": 99,
                "BODY": "Looks good",
                "OWNER_USER_ID": 2
            })))
            .expect(1)
            .mount(&server)
            .await;

        let comment: insightly_client::models::Comment =
            client(&server)?.add_email_comment(15, "Looks good", 2).await?;

        assert_eq!(comment.comment_id, 99);
        Ok(())
    }

    #[tokio::test]
    async fn task_comment_uses_the_generic_path() -> TestResult {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2.1/Tasks/4/Comments"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "COMMENT_ID": 1 })))
            .expect(1)
            .mount(&server)
            .await;

        let comment = NewComment {
            body: "Done".to_string(),
            owner_user_id: 1,
        };
        let posted: Value = client(&server)?.tasks().add_comment(4, &comment).await?;

        assert_eq!(posted["COMMENT_ID"], 1);
        Ok(())
    }
}

mod sample {
    use super::{
        Mock, MockServer, ResponseTemplate, TestResult, Value, client, json, last_query, method,
        path, query_param,
    };

    #[tokio::test]
    async fn sample_returns_the_first_record() -> TestResult {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2.1/Teams"))
            .and(query_param("$top", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "TEAM_ID": 6 }])))
            .expect(1)
            .mount(&server)
            .await;

        let team: Option<Value> = client(&server)?.teams().sample().await?;

        assert_eq!(team, Some(json!({ "TEAM_ID": 6 })));
        Ok(())
    }

    #[tokio::test]
    async fn sample_of_an_empty_collection_is_none() -> TestResult {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2.1/FileCategories"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let category: Option<Value> = client(&server)?.file_categories().sample().await?;

        assert_eq!(category, None);
        assert_eq!(last_query(&server).await, None);
        Ok(())
    }
}
