//! Declarative table of every Insightly v2.1 resource this client speaks to.

use super::{Operations, ResourceSpec, SubResource};
use crate::odata::ListSupport;

const READ_ONLY_LIST: Operations = Operations {
    list: true,
    ..Operations::NONE
};

const READ_ONLY: Operations = Operations {
    list: true,
    get: true,
    ..Operations::NONE
};

const FULL: Operations = Operations {
    list: true,
    get: true,
    create: true,
    update: true,
    delete: true,
};

const RECORD_NESTED: &[SubResource] = &[SubResource::Emails, SubResource::Notes, SubResource::Tasks];

const PEOPLE_LIST: ListSupport = ListSupport {
    odata: true,
    email: true,
    tag: true,
    ids: true,
    team_id: false,
};

pub const CONTACTS: ResourceSpec = ResourceSpec {
    name: "Contacts",
    path: "/v2.1/Contacts",
    operations: FULL,
    id_field: Some("CONTACT_ID"),
    list_support: PEOPLE_LIST,
    nested: RECORD_NESTED,
};

pub const LEADS: ResourceSpec = ResourceSpec {
    name: "Leads",
    path: "/v2.1/Leads",
    operations: FULL,
    id_field: Some("LEAD_ID"),
    list_support: PEOPLE_LIST,
    nested: &[],
};

pub const LEAD_SOURCES: ResourceSpec = ResourceSpec {
    name: "LeadSources",
    path: "/v2.1/LeadSources",
    operations: READ_ONLY_LIST,
    id_field: None,
    list_support: ListSupport::ODATA,
    nested: &[],
};

pub const COUNTRIES: ResourceSpec = ResourceSpec {
    name: "Countries",
    path: "/v2.1/Countries",
    operations: READ_ONLY_LIST,
    id_field: None,
    list_support: ListSupport::NONE,
    nested: &[],
};

pub const CURRENCIES: ResourceSpec = ResourceSpec {
    name: "Currencies",
    path: "/v2.1/Currencies",
    operations: READ_ONLY_LIST,
    id_field: None,
    list_support: ListSupport::NONE,
    nested: &[],
};

pub const CUSTOM_FIELDS: ResourceSpec = ResourceSpec {
    name: "CustomFields",
    path: "/v2.1/CustomFields",
    operations: READ_ONLY,
    id_field: None,
    list_support: ListSupport::NONE,
    nested: &[],
};

pub const EMAILS: ResourceSpec = ResourceSpec {
    name: "Emails",
    path: "/v2.1/Emails",
    operations: Operations {
        list: true,
        get: true,
        delete: true,
        ..Operations::NONE
    },
    id_field: None,
    list_support: ListSupport::ODATA,
    nested: &[SubResource::Comments],
};

pub const EVENTS: ResourceSpec = ResourceSpec {
    name: "Events",
    path: "/v2.1/Events",
    operations: FULL,
    id_field: Some("EVENT_ID"),
    list_support: ListSupport::ODATA,
    nested: &[],
};

pub const FILE_CATEGORIES: ResourceSpec = ResourceSpec {
    name: "FileCategories",
    path: "/v2.1/FileCategories",
    operations: FULL,
    id_field: Some("CATEGORY_ID"),
    list_support: ListSupport::NONE,
    nested: &[],
};

pub const NOTES: ResourceSpec = ResourceSpec {
    name: "Notes",
    path: "/v2.1/Notes",
    operations: FULL,
    id_field: Some("NOTE_ID"),
    list_support: ListSupport::ODATA,
    nested: &[SubResource::Comments],
};

pub const OPPORTUNITIES: ResourceSpec = ResourceSpec {
    name: "Opportunities",
    path: "/v2.1/Opportunities",
    operations: FULL,
    id_field: Some("OPPORTUNITY_ID"),
    list_support: ListSupport::ODATA,
    nested: &[
        SubResource::Emails,
        SubResource::Notes,
        SubResource::StateHistory,
        SubResource::Tasks,
    ],
};

pub const OPPORTUNITY_CATEGORIES: ResourceSpec = ResourceSpec {
    name: "OpportunityCategories",
    path: "/v2.1/OpportunityCategories",
    operations: FULL,
    id_field: Some("CATEGORY_ID"),
    list_support: ListSupport::NONE,
    nested: &[],
};

pub const OPPORTUNITY_STATE_REASONS: ResourceSpec = ResourceSpec {
    name: "OpportunityStateReasons",
    path: "/v2.1/OpportunityStateReasons",
    operations: READ_ONLY_LIST,
    id_field: None,
    list_support: ListSupport::NONE,
    nested: &[],
};

// The API spells it the British way.
pub const ORGANIZATIONS: ResourceSpec = ResourceSpec {
    name: "Organisations",
    path: "/v2.1/Organisations",
    operations: FULL,
    id_field: Some("ORGANISATION_ID"),
    list_support: ListSupport::ODATA,
    nested: RECORD_NESTED,
};

pub const PIPELINES: ResourceSpec = ResourceSpec {
    name: "Pipelines",
    path: "/v2.1/Pipelines",
    operations: READ_ONLY,
    id_field: None,
    list_support: ListSupport::NONE,
    nested: &[],
};

pub const PIPELINE_STAGES: ResourceSpec = ResourceSpec {
    name: "PipelineStages",
    path: "/v2.1/PipelineStages",
    operations: READ_ONLY,
    id_field: None,
    list_support: ListSupport::NONE,
    nested: &[],
};

pub const PROJECT_CATEGORIES: ResourceSpec = ResourceSpec {
    name: "ProjectCategories",
    path: "/v2.1/ProjectCategories",
    operations: FULL,
    id_field: Some("CATEGORY_ID"),
    list_support: ListSupport::NONE,
    nested: &[],
};

pub const PROJECTS: ResourceSpec = ResourceSpec {
    name: "Projects",
    path: "/v2.1/Projects",
    operations: FULL,
    id_field: Some("PROJECT_ID"),
    list_support: ListSupport {
        odata: true,
        tag: true,
        ids: true,
        ..ListSupport::NONE
    },
    nested: RECORD_NESTED,
};

pub const RELATIONSHIPS: ResourceSpec = ResourceSpec {
    name: "Relationships",
    path: "/v2.1/Relationships",
    operations: READ_ONLY_LIST,
    id_field: None,
    list_support: ListSupport::NONE,
    nested: &[],
};

pub const TAGS: ResourceSpec = ResourceSpec {
    name: "Tags",
    path: "/v2.1/Tags",
    operations: Operations {
        get: true,
        ..Operations::NONE
    },
    id_field: None,
    list_support: ListSupport::NONE,
    nested: &[],
};

pub const TASKS: ResourceSpec = ResourceSpec {
    name: "Tasks",
    path: "/v2.1/Tasks",
    operations: FULL,
    id_field: Some("TASK_ID"),
    list_support: ListSupport {
        odata: true,
        ids: true,
        ..ListSupport::NONE
    },
    nested: &[SubResource::Comments],
};

pub const TEAMS: ResourceSpec = ResourceSpec {
    name: "Teams",
    path: "/v2.1/Teams",
    operations: FULL,
    id_field: Some("TEAM_ID"),
    list_support: ListSupport::ODATA,
    nested: &[],
};

// No upsert field: memberships are created and updated explicitly.
pub const TEAM_MEMBERS: ResourceSpec = ResourceSpec {
    name: "TeamMembers",
    path: "/v2.1/TeamMembers",
    operations: FULL,
    id_field: None,
    list_support: ListSupport {
        team_id: true,
        ..ListSupport::NONE
    },
    nested: &[],
};

pub const USERS: ResourceSpec = ResourceSpec {
    name: "Users",
    path: "/v2.1/Users",
    operations: READ_ONLY,
    id_field: None,
    list_support: ListSupport::NONE,
    nested: &[],
};

/// Every resource in the catalog.
pub const ALL: &[&ResourceSpec] = &[
    &CONTACTS,
    &COUNTRIES,
    &CURRENCIES,
    &CUSTOM_FIELDS,
    &EMAILS,
    &EVENTS,
    &FILE_CATEGORIES,
    &LEADS,
    &LEAD_SOURCES,
    &NOTES,
    &OPPORTUNITIES,
    &OPPORTUNITY_CATEGORIES,
    &OPPORTUNITY_STATE_REASONS,
    &ORGANIZATIONS,
    &PIPELINES,
    &PIPELINE_STAGES,
    &PROJECT_CATEGORIES,
    &PROJECTS,
    &RELATIONSHIPS,
    &TAGS,
    &TASKS,
    &TEAMS,
    &TEAM_MEMBERS,
    &USERS,
];
