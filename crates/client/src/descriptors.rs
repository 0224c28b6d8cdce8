//! Action descriptors and parameter shapes for the known server calls.
//!
//! Nothing here is documented by Salesforce; descriptors and shapes were
//! observed by proxying Experience Cloud sessions. Parameter builders keep
//! the magic constants (layout types, navigation locations) in one place.

use serde_json::{Value, json};

use crate::routes::Route;

pub const GET_CONFIG_DATA: &str = "serviceComponent://ui.force.components.controllers.hostConfig.HostConfigController/ACTION$getConfigData";

pub const GET_ITEMS: &str = "serviceComponent://ui.force.components.controllers.lists.selectableListDataProvider.SelectableListDataProviderController/ACTION$getItems";

pub const GET_RECORD: &str = "serviceComponent://ui.force.components.controllers.detail.DetailController/ACTION$getRecord";

pub const SEARCH_RECORDS: &str = "serviceComponent://ui.lookup.runtime.components.controllers.LookupController/ACTION$searchRecords";

pub const GET_FEED_ITEMS: &str = "serviceComponent://ui.chatter.components.aura.components.forceChatter.lightning.api.ChatterFeedController/ACTION$getFeedItems";

pub const GET_EXPOSED_APEX_METHODS: &str = "aura://ApexActionController/ACTION$getExposedMethods";

pub const EXECUTE_APEX: &str = "aura://ApexActionController/ACTION$execute";

pub const GET_PROFILE_MENU: &str = "serviceComponent://ui.communities.components.aura.components.forceCommunity.profileMenu.ProfileMenuController/ACTION$getProfileMenuResponse";

pub const GET_PAGE_COMPONENT: &str = "serviceComponent://ui.comm.runtime.components.aura.components.siteforce.controller.PageComponentController/ACTION$getPageComponent";

pub fn get_items_params(entity: &str, page_size: u32, page: u32) -> Value {
    json!({
        "entityNameOrId": entity,
        "layoutType": "FULL",
        "pageSize": page_size,
        "currentPage": page,
        "useTimeout": false,
        "getCount": true,
        "enableRowActions": false,
    })
}

pub fn get_record_params(record_id: &str) -> Value {
    json!({
        "recordId": record_id,
        "record": null,
        "inContextOfComponent": "",
        "mode": "VIEW",
        "layoutType": "FULL",
        "defaultFieldValues": null,
        "navigationLocation": "LIST_VIEW_ROW",
    })
}

pub fn search_params(term: &str, entity: &str, fields: &[String]) -> Value {
    json!({
        "searchTerm": term,
        "entityApiName": entity,
        "fields": fields,
        "scope": "COMMUNITY",
    })
}

pub fn feed_items_params(record_id: &str) -> Value {
    json!({
        "recordId": record_id,
        "feedElementPage": 1,
    })
}

pub fn execute_apex_params(class: &str, method: &str, params: Value, namespace: &str) -> Value {
    json!({
        "namespace": namespace,
        "classname": class,
        "method": method,
        "params": params,
        "cacheable": false,
        "isContinuation": false,
    })
}

/// Params for the per-route page-component sweep the component collector
/// runs; everything comes out of the scraped [`Route`].
pub fn page_component_params(route: &Route) -> Value {
    json!({
        "attributes": {
            "viewId": route.id,
            "routeType": route.event,
            "themeLayoutType": route.theme_layout_type,
            "params": { "viewid": route.view_uuid },
        },
        "publishedChangelistNum": route.published_changelist_num,
        "brandingSetId": route.branding_set_id,
    })
}
